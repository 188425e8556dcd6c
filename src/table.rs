//! Batch entry points over Arrow arrays.
//!
//! Every entry point takes one input row per array element, treats a null element as missing
//! input and writes nulls for missing results. Only mismatched input lengths and interrupts
//! fail a whole call.

use std::sync::Arc;

use arrow_array::builder::{ListBuilder, StringBuilder};
use arrow_array::{
    Array, ArrayRef, BooleanArray, FixedSizeListArray, Float64Array, Int32Array, ListArray,
    RecordBatch, StringArray,
};
use arrow_buffer::NullBuffer;
use arrow_schema::{DataType, Field, Schema};

use crate::algorithm::native::{BoundingRect, CoordRow};
use crate::batch::{BatchOptions, BatchRunner, Interrupt};
use crate::dispatch::{Dispatcher, Operation, OperationOutput};
use crate::error::{Result, WktKitError};
use crate::kernel::{GeoKernel, GeometryKernel};
use crate::synthesize::{box_list_text, box_text, group_text, matrix_text, CoordMatrix};
use crate::synthesize::{DumpGeometry, DumpOptions};
use crate::validate::ValidityEngine;

/// Output of [`WktEngine::bounding`].
#[derive(Debug, Clone)]
pub enum Bounding {
    /// Columns `min_x`, `min_y`, `max_x`, `max_y`.
    Table(RecordBatch),
    /// One `[min_x, min_y, max_x, max_y]` list per row.
    Matrix(FixedSizeListArray),
}

/// Runs row operations over whole arrays.
///
/// ```
/// use arrow_array::{Array, StringArray};
/// use wktkit::table::WktEngine;
///
/// let engine = WktEngine::default();
/// let wkt = StringArray::from(vec![Some("POLYGON ((30 10, 40 40, 20 40, 10 20, 30 10))"), None]);
/// let corrected = engine.correct(&wkt).unwrap();
/// assert_eq!(corrected.value(0), "POLYGON((30 10,10 20,20 40,40 40,30 10))");
/// assert!(corrected.is_null(1));
/// ```
pub struct WktEngine<K = GeoKernel> {
    engine: ValidityEngine<K>,
    options: BatchOptions,
    interrupt: Option<Arc<dyn Interrupt + Send + Sync>>,
}

impl Default for WktEngine<GeoKernel> {
    fn default() -> Self {
        Self::new(GeoKernel::default())
    }
}

impl<K: GeometryKernel> WktEngine<K> {
    pub fn new(kernel: K) -> Self {
        Self {
            engine: ValidityEngine::new(Dispatcher::new(kernel)),
            options: BatchOptions::default(),
            interrupt: None,
        }
    }

    pub fn with_options(self, options: BatchOptions) -> Self {
        Self { options, ..self }
    }

    /// Poll `interrupt` while running batches.
    pub fn with_interrupt(self, interrupt: Arc<dyn Interrupt + Send + Sync>) -> Self {
        Self {
            interrupt: Some(interrupt),
            ..self
        }
    }

    fn dispatcher(&self) -> &Dispatcher<K> {
        self.engine.dispatcher()
    }

    fn kernel(&self) -> &K {
        self.dispatcher().kernel()
    }

    fn runner(&self) -> BatchRunner<'_> {
        let runner = BatchRunner::new(self.options);
        match &self.interrupt {
            Some(interrupt) => runner.with_interrupt(interrupt.as_ref()),
            None => runner,
        }
    }

    /// Columns `is_valid` (boolean) and `comments` (the failure reason).
    pub fn validate(&self, wkt: &StringArray) -> Result<RecordBatch> {
        let results = self
            .runner()
            .run(wkt.len(), |idx| self.engine.validate(row(wkt, idx)))?;

        let (is_valid, comments): (Vec<Option<bool>>, Vec<Option<String>>) = results
            .into_iter()
            .map(|result| (result.is_valid, result.reason))
            .unzip();

        let schema = Schema::new(vec![
            Field::new("is_valid", DataType::Boolean, true),
            Field::new("comments", DataType::Utf8, true),
        ]);
        let columns: Vec<ArrayRef> = vec![
            Arc::new(BooleanArray::from(is_valid)),
            Arc::new(StringArray::from(comments)),
        ];
        Ok(RecordBatch::try_new(Arc::new(schema), columns)?)
    }

    /// Columns `lng` and `lat`.
    pub fn centroid(&self, wkt: &StringArray) -> Result<RecordBatch> {
        let centroids = self.runner().try_run(wkt.len(), |idx| {
            match self.dispatcher().dispatch(row(wkt, idx), Operation::Centroid)? {
                OperationOutput::Centroid(coord) => Ok(coord),
                _ => Err(unexpected_output()),
            }
        })?;

        let lng: Float64Array = centroids.iter().map(|c| c.map(|c| c.x)).collect();
        let lat: Float64Array = centroids.iter().map(|c| c.map(|c| c.y)).collect();
        let schema = Schema::new(vec![
            Field::new("lng", DataType::Float64, true),
            Field::new("lat", DataType::Float64, true),
        ]);
        let columns: Vec<ArrayRef> = vec![Arc::new(lng), Arc::new(lat)];
        Ok(RecordBatch::try_new(Arc::new(schema), columns)?)
    }

    fn envelopes(&self, wkt: &StringArray) -> Result<Vec<Option<BoundingRect>>> {
        self.runner().try_run(wkt.len(), |idx| {
            match self.dispatcher().dispatch(row(wkt, idx), Operation::Envelope)? {
                OperationOutput::Envelope(rect) => Ok(rect),
                _ => Err(unexpected_output()),
            }
        })
    }

    /// The envelope of every row, as a table or as a matrix.
    pub fn bounding(&self, wkt: &StringArray, as_matrix: bool) -> Result<Bounding> {
        let envelopes = self.envelopes(wkt)?;
        if as_matrix {
            return bounding_matrix(&envelopes).map(Bounding::Matrix);
        }

        let names = ["min_x", "min_y", "max_x", "max_y"];
        let fields: Vec<Field> = names
            .iter()
            .map(|name| Field::new(*name, DataType::Float64, true))
            .collect();
        let columns: Vec<ArrayRef> = (0..names.len())
            .map(|col| {
                let values: Float64Array = envelopes
                    .iter()
                    .map(|rect| rect.map(|rect| rect.to_array()[col]))
                    .collect();
                Arc::new(values) as ArrayRef
            })
            .collect();
        Ok(Bounding::Table(RecordBatch::try_new(
            Arc::new(Schema::new(fields)),
            columns,
        )?))
    }

    /// Reverse the point order of each row.
    ///
    /// Rows that cannot be parsed keep their original text.
    pub fn reverse(&self, wkt: &StringArray) -> Result<StringArray> {
        self.rewrite(wkt, Operation::Reverse)
    }

    /// Fix the ring orientation of rows whose only problem is their orientation.
    ///
    /// Every other row keeps its original text.
    pub fn correct(&self, wkt: &StringArray) -> Result<StringArray> {
        self.rewrite(wkt, Operation::CorrectOrientation)
    }

    fn rewrite(&self, wkt: &StringArray, operation: Operation) -> Result<StringArray> {
        let output = self.runner().run(wkt.len(), |idx| {
            let text = row(wkt, idx)?;
            match self.dispatcher().dispatch(Some(text), operation) {
                Ok(OperationOutput::Text(rewritten)) => Some(rewritten),
                _ => Some(text.to_string()),
            }
        })?;
        Ok(StringArray::from(output))
    }

    /// Columns `object` (1-based input position), `ring`, `lng` and `lat`, one row per polygon
    /// vertex.
    ///
    /// Rows that are not polygons contribute a single row of nulls.
    pub fn coordinates(&self, wkt: &StringArray) -> Result<RecordBatch> {
        let exploded = self.runner().run(wkt.len(), |idx| {
            let object = i32::try_from(idx + 1)
                .map_err(|_| WktKitError::General(format!("row {idx} overflows an object id")))?;
            let operation = Operation::ExtractCoordinates { object };
            let rows = match self.dispatcher().dispatch(row(wkt, idx), operation) {
                Ok(OperationOutput::Coordinates(rows)) => rows,
                _ => vec![CoordRow::missing(object)],
            };
            Ok::<_, WktKitError>(rows)
        })?;
        let rows: Vec<CoordRow> = exploded
            .into_iter()
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .flatten()
            .collect();

        let object: Int32Array = rows.iter().map(|row| Some(row.object)).collect();
        let ring: StringArray = rows.iter().map(|row| row.ring.as_deref()).collect();
        let lng: Float64Array = rows.iter().map(|row| row.lng).collect();
        let lat: Float64Array = rows.iter().map(|row| row.lat).collect();

        let schema = Schema::new(vec![
            Field::new("object", DataType::Int32, false),
            Field::new("ring", DataType::Utf8, true),
            Field::new("lng", DataType::Float64, true),
            Field::new("lat", DataType::Float64, true),
        ]);
        let columns: Vec<ArrayRef> = vec![
            Arc::new(object),
            Arc::new(ring),
            Arc::new(lng),
            Arc::new(lat),
        ];
        Ok(RecordBatch::try_new(Arc::new(schema), columns)?)
    }

    /// Polygon WKT of boxes given as four parallel arrays.
    ///
    /// # Errors
    ///
    /// - [`WktKitError::LengthMismatch`] if the arrays differ in length
    pub fn bounding_wkt(
        &self,
        min_x: &Float64Array,
        max_x: &Float64Array,
        min_y: &Float64Array,
        max_y: &Float64Array,
    ) -> Result<StringArray> {
        let len = min_x.len();
        if [max_x.len(), min_y.len(), max_y.len()]
            .iter()
            .any(|other| *other != len)
        {
            return Err(WktKitError::LengthMismatch);
        }

        let value = |array: &Float64Array, idx: usize| array.is_valid(idx).then(|| array.value(idx));
        let output = self.runner().run(len, |idx| {
            let bounds = [
                value(min_x, idx),
                value(min_y, idx),
                value(max_x, idx),
                value(max_y, idx),
            ];
            box_text(self.kernel(), bounds)
        })?;
        Ok(StringArray::from(output))
    }

    /// Polygon WKT of boxes given as `[min_x, min_y, max_x, max_y]` lists.
    ///
    /// A null list, a list that is not Float64, or one without exactly four values gives null.
    pub fn bounding_wkt_list(&self, boxes: &ListArray) -> Result<StringArray> {
        let output = self.runner().run(boxes.len(), |idx| {
            if boxes.is_null(idx) {
                return None;
            }
            let values = boxes.value(idx);
            let values = values.as_any().downcast_ref::<Float64Array>()?;
            let values: Vec<Option<f64>> = values.iter().collect();
            box_list_text(self.kernel(), &values)
        })?;
        Ok(StringArray::from(output))
    }

    /// Polygon WKT from groups of two-column coordinate matrices.
    ///
    /// With `group` each group becomes one value, a polygon or a multi-polygon, returned as a
    /// string array. Otherwise each group becomes a list holding one polygon per matrix.
    pub fn sp_convert(&self, groups: &[Vec<CoordMatrix>], group: bool) -> Result<ArrayRef> {
        if group {
            let output = self
                .runner()
                .run(groups.len(), |idx| group_text(self.kernel(), &groups[idx]))?;
            return Ok(Arc::new(StringArray::from(output)));
        }

        let output = self.runner().run(groups.len(), |idx| {
            groups[idx]
                .iter()
                .map(|matrix| matrix_text(self.kernel(), matrix))
                .collect::<Vec<_>>()
        })?;
        let mut builder = ListBuilder::new(StringBuilder::new());
        for polygons in output {
            builder.values().extend(polygons);
            builder.append(true);
        }
        Ok(Arc::new(builder.finish()))
    }

    /// WKT text of GeoJSON-like geometry objects at a fixed precision.
    ///
    /// Objects whose coordinates have the wrong shape give null, as do three-ordinate objects
    /// when `options.third` is neither `z` nor `m`.
    pub fn dump(&self, objects: &[DumpGeometry], options: &DumpOptions) -> Result<StringArray> {
        let output = self
            .runner()
            .try_run(objects.len(), |idx| objects[idx].to_wkt(options))?;
        Ok(StringArray::from(output))
    }
}

fn row(wkt: &StringArray, idx: usize) -> Option<&str> {
    wkt.is_valid(idx).then(|| wkt.value(idx))
}

fn unexpected_output() -> WktKitError {
    WktKitError::General("operation produced an unexpected output".to_string())
}

fn bounding_matrix(envelopes: &[Option<BoundingRect>]) -> Result<FixedSizeListArray> {
    let values: Float64Array = envelopes
        .iter()
        .flat_map(|rect| match rect {
            Some(rect) => rect.to_array().map(Some),
            None => [None; 4],
        })
        .collect();
    let nulls = NullBuffer::from(envelopes.iter().map(Option::is_some).collect::<Vec<_>>());
    let field = Arc::new(Field::new("item", DataType::Float64, true));
    Ok(FixedSizeListArray::try_new(
        field,
        4,
        Arc::new(values),
        Some(nulls),
    )?)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::validity::FailureCode;
    use crate::batch::NeverInterrupt;
    use crate::datatypes::GeometryKind;
    use crate::io::wkt::parse;
    use crate::test::properties::{mixed_array, string_array};
    use crate::test::wkt::*;
    use approx::assert_relative_eq;
    use arrow_array::cast::AsArray;
    use arrow_array::types::Float64Type;
    use std::sync::atomic::AtomicBool;

    fn strings(batch: &RecordBatch, col: usize) -> &StringArray {
        batch.column(col).as_string::<i32>()
    }

    fn floats(batch: &RecordBatch, col: usize) -> &Float64Array {
        batch.column(col).as_primitive::<Float64Type>()
    }

    #[test]
    fn validate_missing_and_unsupported() {
        let engine = WktEngine::default();
        let wkt = StringArray::from(vec![None, Some(UNSUPPORTED)]);
        let batch = engine.validate(&wkt).unwrap();
        let is_valid = batch.column(0).as_boolean();
        let comments = strings(&batch, 1);

        assert!(is_valid.is_null(0));
        assert!(comments.is_null(0));
        assert!(!is_valid.value(1));
        assert_eq!(
            comments.value(1),
            "Object could not be recognised as a supported WKT type"
        );
    }

    #[test]
    fn validate_reasons() {
        let engine = WktEngine::default();
        let wkt = string_array(&[POLYGON_CW, POLYGON_NOT_CLOSED, POLYGON_BOWTIE, POLYGON]);
        let batch = engine.validate(&wkt).unwrap();
        let is_valid = batch.column(0).as_boolean();
        let comments = strings(&batch, 1);

        assert!(is_valid.value(0));
        assert!(comments.is_null(0));
        assert_eq!(comments.value(1), FailureCode::NotClosed.message());
        assert_eq!(comments.value(2), FailureCode::SelfIntersections.message());
        assert_eq!(comments.value(3), FailureCode::WrongOrientation.message());
    }

    #[test]
    fn centroid_of_mixed_rows() {
        let batch = WktEngine::default().centroid(&mixed_array()).unwrap();
        let (lng, lat) = (floats(&batch, 0), floats(&batch, 1));
        assert_eq!(lng.null_count(), 3);
        assert!(lng.is_valid(0));
        assert_eq!((lng.value(4), lat.value(4)), (30., 10.));
    }

    #[test]
    fn centroid_survives_text_round_trip() {
        let engine = WktEngine::default();
        let geom = parse(POLYGON_CW_WITH_HOLE, GeometryKind::Polygon).unwrap();
        let wkt = string_array(&[POLYGON_CW_WITH_HOLE, &geom.to_string()]);
        let batch = engine.centroid(&wkt).unwrap();
        let (lng, lat) = (floats(&batch, 0), floats(&batch, 1));
        assert_eq!(lng.value(0), lng.value(1));
        assert_eq!(lat.value(0), lat.value(1));
    }

    #[test]
    fn centroid_of_square() {
        let engine = WktEngine::default();
        let batch = engine
            .centroid(&string_array(&["POLYGON ((0 0, 0 3, 3 3, 3 0, 0 0))"]))
            .unwrap();
        assert_relative_eq!(floats(&batch, 0).value(0), 1.5);
        assert_relative_eq!(floats(&batch, 1).value(0), 1.5);
    }

    #[test]
    fn bounding_table() {
        let engine = WktEngine::default();
        let wkt = StringArray::from(vec![Some(POLYGON), None, Some(COLLECTION)]);
        let Bounding::Table(batch) = engine.bounding(&wkt, false).unwrap() else {
            panic!("expected a table");
        };
        let values: Vec<f64> = (0..4).map(|col| floats(&batch, col).value(0)).collect();
        assert_eq!(values, vec![10., 10., 40., 40.]);
        for col in 0..4 {
            assert!(floats(&batch, col).is_null(1));
            assert!(floats(&batch, col).is_null(2));
        }
    }

    #[test]
    fn bounding_matrix_rows() {
        let engine = WktEngine::default();
        let wkt = StringArray::from(vec![Some(LINESTRING), Some(UNSUPPORTED)]);
        let Bounding::Matrix(matrix) = engine.bounding(&wkt, true).unwrap() else {
            panic!("expected a matrix");
        };
        assert_eq!(matrix.value_length(), 4);
        assert!(matrix.is_null(1));
        let first = matrix.value(0);
        let first = first.as_primitive::<Float64Type>();
        assert_eq!(first.values().to_vec(), vec![10., 10., 40., 40.]);
    }

    #[test]
    fn reverse_twice_restores_order() {
        let engine = WktEngine::default();
        let wkt = string_array(&[LINESTRING, MULTILINESTRING, POLYGON_CW_WITH_HOLE]);
        let once = engine.reverse(&wkt).unwrap();
        assert_eq!(once.value(0), "LINESTRING(40 40,10 30,30 10)");
        let twice = engine.reverse(&once).unwrap();
        let direct: Vec<String> = wkt
            .iter()
            .flatten()
            .map(|text| parse(text, GeometryKind::from_wkt(text)).unwrap().to_string())
            .collect();
        let round_trip: Vec<&str> = twice.iter().flatten().collect();
        assert_eq!(round_trip, direct);
    }

    #[test]
    fn reverse_keeps_unparsable_text() {
        let reversed = WktEngine::default().reverse(&mixed_array()).unwrap();
        assert!(reversed.is_null(1));
        assert_eq!(reversed.value(2), UNSUPPORTED);
        assert!(reversed.value(3).contains("cheese"));
    }

    #[test]
    fn correct_is_idempotent() {
        let engine = WktEngine::default();
        let wkt = string_array(&[POLYGON, POLYGON_CW, MULTIPOLYGON, POLYGON_BOWTIE]);
        let once = engine.correct(&wkt).unwrap();
        let twice = engine.correct(&once).unwrap();
        assert_eq!(once, twice);
        assert_eq!(once.value(0), "POLYGON((30 10,10 20,20 40,40 40,30 10))");
        assert_eq!(once.value(1), POLYGON_CW);
        assert_eq!(once.value(3), POLYGON_BOWTIE);
    }

    #[test]
    fn coordinates_of_polygon() {
        let batch = WktEngine::default()
            .coordinates(&string_array(&[POLYGON]))
            .unwrap();
        assert_eq!(batch.num_rows(), 5);

        let object = batch.column(0).as_primitive::<arrow_array::types::Int32Type>();
        assert!(object.values().iter().all(|id| *id == 1));
        assert!(strings(&batch, 1).iter().all(|ring| ring == Some("outer")));
        let points: Vec<(f64, f64)> = floats(&batch, 2)
            .values()
            .iter()
            .zip(floats(&batch, 3).values().iter())
            .map(|(x, y)| (*x, *y))
            .collect();
        assert_eq!(
            points,
            vec![(30., 10.), (40., 40.), (20., 40.), (10., 20.), (30., 10.)]
        );
    }

    #[test]
    fn coordinates_of_mixed_rows() {
        let batch = WktEngine::default().coordinates(&mixed_array()).unwrap();
        // five vertices from the polygon, one placeholder for each other row
        assert_eq!(batch.num_rows(), 9);
        let object = batch.column(0).as_primitive::<arrow_array::types::Int32Type>();
        assert_eq!(&object.values()[5..], &[2, 3, 4, 5]);
        assert_eq!(strings(&batch, 1).null_count(), 4);
        assert_eq!(floats(&batch, 2).null_count(), 4);
    }

    #[test]
    fn coordinates_label_holes() {
        let batch = WktEngine::default()
            .coordinates(&string_array(&[POLYGON_CW_WITH_HOLE]))
            .unwrap();
        let rings: Vec<&str> = strings(&batch, 1).iter().flatten().collect();
        assert_eq!(rings.iter().filter(|ring| **ring == "outer").count(), 5);
        assert_eq!(rings.iter().filter(|ring| **ring == "inner 1").count(), 4);
    }

    #[test]
    fn bounding_wkt_from_arrays() {
        let engine = WktEngine::default();
        let min_x = Float64Array::from(vec![Some(1.), None, Some(0.)]);
        let max_x = Float64Array::from(vec![Some(2.), Some(1.), Some(f64::NAN)]);
        let min_y = Float64Array::from(vec![Some(3.), Some(1.), Some(0.)]);
        let max_y = Float64Array::from(vec![Some(4.), Some(1.), Some(1.)]);
        let output = engine.bounding_wkt(&min_x, &max_x, &min_y, &max_y).unwrap();
        assert_eq!(output.value(0), "POLYGON((1 3,1 4,2 4,2 3,1 3))");
        assert!(output.is_null(1));
        assert!(output.is_null(2));
    }

    #[test]
    fn bounding_wkt_length_mismatch() {
        let engine = WktEngine::default();
        let short = Float64Array::from(vec![1.]);
        let long = Float64Array::from(vec![1., 2.]);
        assert_eq!(
            engine.bounding_wkt(&short, &long, &long, &long),
            Err(WktKitError::LengthMismatch)
        );
    }

    #[test]
    fn bounding_wkt_from_list() {
        let boxes = ListArray::from_iter_primitive::<Float64Type, _, _>(vec![
            Some(vec![Some(0.), Some(0.), Some(2.), Some(1.)]),
            None,
            Some(vec![Some(0.), Some(0.), Some(2.)]),
            Some(vec![Some(0.), None, Some(2.), Some(1.)]),
        ]);
        let output = WktEngine::default().bounding_wkt_list(&boxes).unwrap();
        assert_eq!(output.value(0), "POLYGON((0 0,0 1,2 1,2 0,0 0))");
        assert_eq!(output.null_count(), 3);
    }

    #[test]
    fn sp_convert_grouped_and_ungrouped() {
        let engine = WktEngine::default();
        let square =
            CoordMatrix::from_rows(&[[0., 0.], [0., 1.], [1., 1.], [1., 0.], [0., 0.]]).unwrap();
        let wide = CoordMatrix::from_rows(&[[0., 0., 0.]]).unwrap();
        let groups = vec![
            vec![square.clone()],
            vec![square.clone(), square.clone()],
            vec![wide.clone()],
            vec![square, wide],
        ];

        let grouped = engine.sp_convert(&groups, true).unwrap();
        let grouped = grouped.as_string::<i32>();
        assert_eq!(grouped.value(0), "POLYGON((0 0,0 1,1 1,1 0,0 0))");
        assert!(grouped.value(1).starts_with("MULTIPOLYGON((("));
        assert!(grouped.is_null(2));
        assert!(grouped.is_null(3));

        let ungrouped = engine.sp_convert(&groups, false).unwrap();
        let ungrouped = ungrouped.as_list::<i32>();
        assert_eq!(ungrouped.len(), 4);
        let last = ungrouped.value(3);
        let last = last.as_string::<i32>();
        assert_eq!(last.len(), 2);
        assert_eq!(last.value(0), "POLYGON((0 0,0 1,1 1,1 0,0 0))");
        assert!(last.is_null(1));
    }

    #[test]
    fn dump_objects() {
        let engine = WktEngine::default();
        let objects = vec![
            DumpGeometry::Point(vec![1., 2.]),
            DumpGeometry::LineString(vec![vec![1., 2.], vec![3.]]),
        ];
        let output = engine.dump(&objects, &DumpOptions::new(1)).unwrap();
        assert_eq!(output.value(0), "POINT (1.0 2.0)");
        assert!(output.is_null(1));

    }

    #[test]
    fn dump_bad_tag_nulls_only_three_ordinate_objects() {
        let objects = vec![
            DumpGeometry::Point(vec![1., 2.]),
            DumpGeometry::Point(vec![1., 2., 3.]),
        ];
        let output = WktEngine::default()
            .dump(&objects, &DumpOptions::new(0).with_third("x"))
            .unwrap();
        assert_eq!(output.len(), 2);
        assert_eq!(output.value(0), "POINT (1 2)");
        assert!(output.is_null(1));
    }

    #[test]
    fn interrupt_aborts_call() {
        let engine = WktEngine::default().with_interrupt(Arc::new(AtomicBool::new(true)));
        assert_eq!(
            engine.validate(&mixed_array()).unwrap_err(),
            WktKitError::Interrupted { row: 0 }
        );

        let engine = WktEngine::default().with_interrupt(Arc::new(NeverInterrupt));
        assert!(engine.validate(&mixed_array()).is_ok());
    }
}
