//! Routing of a single input row to the kernel call for an operation.

use crate::algorithm::native::{explode_polygon, BoundingRect, CoordRow};
use crate::algorithm::validity::FailureCode;
use crate::datatypes::GeometryKind;
use crate::error::{Result, WktKitError};
use crate::geometry::GeometryVariant;
use crate::kernel::GeometryKernel;

/// A per-row operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Validate,
    Centroid,
    Envelope,
    Reverse,
    CorrectOrientation,

    /// Polygon ring coordinates, labelled with the 1-based input position `object`.
    ExtractCoordinates { object: i32 },
}

/// The result of one successfully dispatched row.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationOutput {
    Validity(std::result::Result<(), FailureCode>),
    Centroid(geo::Coord<f64>),
    Envelope(BoundingRect),
    Text(String),
    Coordinates(Vec<CoordRow>),
}

/// Classifies rows, materializes them and calls into a [`GeometryKernel`].
///
/// Missing and unsupported rows never reach the kernel: they fail with
/// [`WktKitError::MissingInput`] and [`WktKitError::UnsupportedType`] respectively, the same
/// way a parse failure does.
#[derive(Debug, Clone)]
pub struct Dispatcher<K> {
    kernel: K,
}

impl<K: GeometryKernel> Dispatcher<K> {
    pub fn new(kernel: K) -> Self {
        Self { kernel }
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Classify a row and parse it into a concrete geometry.
    fn materialize(&self, text: &str) -> Result<GeometryVariant> {
        let kind = GeometryKind::from_wkt(text);
        if !kind.is_single() {
            return Err(WktKitError::UnsupportedType);
        }
        self.kernel.parse(text, kind)
    }

    /// Validate one non-collection row.
    ///
    /// The outer `Result` fails when the row cannot be materialized, the inner one when the
    /// geometry is structurally invalid.
    pub fn validity(&self, text: &str) -> Result<std::result::Result<(), FailureCode>> {
        let geom = self.materialize(text)?;
        Ok(self.kernel.is_valid(&geom))
    }

    /// Run `operation` on one row.
    pub fn dispatch(&self, text: Option<&str>, operation: Operation) -> Result<OperationOutput> {
        let text = text.ok_or(WktKitError::MissingInput)?;
        let mut geom = self.materialize(text)?;

        let output = match operation {
            Operation::Validate => OperationOutput::Validity(self.kernel.is_valid(&geom)),
            Operation::Centroid => OperationOutput::Centroid(self.kernel.centroid(&geom)?),
            Operation::Envelope => OperationOutput::Envelope(self.kernel.envelope(&geom)?),
            Operation::Reverse => {
                self.kernel.reverse(&mut geom);
                OperationOutput::Text(self.kernel.to_text(&geom))
            }
            Operation::CorrectOrientation => {
                if self.kernel.is_valid(&geom) != Err(FailureCode::WrongOrientation) {
                    return Ok(OperationOutput::Text(text.to_string()));
                }
                self.kernel.correct_orientation(&mut geom);
                OperationOutput::Text(self.kernel.to_text(&geom))
            }
            Operation::ExtractCoordinates { object } => {
                let GeometryVariant::Polygon(polygon) = &geom else {
                    return Err(WktKitError::UnsupportedType);
                };
                OperationOutput::Coordinates(explode_polygon(polygon, object))
            }
        };
        Ok(output)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::kernel::GeoKernel;
    use crate::test::wkt::*;

    fn dispatcher() -> Dispatcher<GeoKernel> {
        Dispatcher::new(GeoKernel::default())
    }

    #[test]
    fn short_circuits_before_kernel() {
        let dispatcher = dispatcher();
        assert_eq!(
            dispatcher.dispatch(None, Operation::Validate),
            Err(WktKitError::MissingInput)
        );
        assert_eq!(
            dispatcher.dispatch(Some(UNSUPPORTED), Operation::Centroid),
            Err(WktKitError::UnsupportedType)
        );
        assert_eq!(
            dispatcher.dispatch(Some(COLLECTION), Operation::Envelope),
            Err(WktKitError::UnsupportedType)
        );
    }

    #[test]
    fn parse_failures_surface() {
        let result = dispatcher().dispatch(Some("POLYGON ((1 2, 3"), Operation::Reverse);
        assert!(matches!(result, Err(WktKitError::Parse(_))));
    }

    #[test]
    fn validates() {
        assert_eq!(
            dispatcher().dispatch(Some(POLYGON_BOWTIE), Operation::Validate),
            Ok(OperationOutput::Validity(Err(
                FailureCode::SelfIntersections
            )))
        );
    }

    #[test]
    fn corrects_only_wrong_orientation() {
        let dispatcher = dispatcher();
        assert_eq!(
            dispatcher.dispatch(Some(POLYGON), Operation::CorrectOrientation),
            Ok(OperationOutput::Text(
                "POLYGON((30 10,10 20,20 40,40 40,30 10))".to_string()
            ))
        );
        for wkt in [POLYGON_CW, POLYGON_BOWTIE, POLYGON_NOT_CLOSED, LINESTRING] {
            assert_eq!(
                dispatcher.dispatch(Some(wkt), Operation::CorrectOrientation),
                Ok(OperationOutput::Text(wkt.to_string()))
            );
        }
    }

    #[test]
    fn coordinates_for_polygons_only() {
        let dispatcher = dispatcher();
        let Ok(OperationOutput::Coordinates(rows)) = dispatcher.dispatch(
            Some(POLYGON_CW_WITH_HOLE),
            Operation::ExtractCoordinates { object: 3 },
        ) else {
            panic!("expected coordinates");
        };
        assert_eq!(rows.len(), 9);
        assert!(rows.iter().all(|row| row.object == 3));
        assert_eq!(rows[5].ring.as_deref(), Some("inner 1"));

        assert_eq!(
            dispatcher.dispatch(Some(POINT), Operation::ExtractCoordinates { object: 1 }),
            Err(WktKitError::UnsupportedType)
        );
        assert_eq!(
            dispatcher.dispatch(
                Some("POLYGON EMPTY"),
                Operation::ExtractCoordinates { object: 1 }
            ),
            Ok(OperationOutput::Coordinates(vec![CoordRow::missing(1)]))
        );
    }
}
