//! Row validation with failure reasons, including GeometryCollections.

use serde::{Deserialize, Serialize};

use crate::datatypes::GeometryKind;
use crate::dispatch::Dispatcher;
use crate::io::wkt::split_collection;
use crate::kernel::GeometryKernel;

const NO_MEMBERS: &str = "No valid objects could be extracted from this GeometryCollection";
const NESTED_COLLECTION: &str = "GeometryCollections cannot be nested";
const UNRECOGNISED_MEMBER: &str =
    "A GeometryCollection member could not be recognised as a supported WKT type";

/// The validity of one row and, when invalid, why.
///
/// Missing input has neither. A valid row has no reason.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidityResult {
    pub is_valid: Option<bool>,
    pub reason: Option<String>,
}

impl ValidityResult {
    pub fn missing() -> Self {
        Self::default()
    }

    pub fn valid() -> Self {
        Self {
            is_valid: Some(true),
            reason: None,
        }
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            is_valid: Some(false),
            reason: Some(reason.into()),
        }
    }

    fn passed(&self) -> bool {
        self.is_valid == Some(true)
    }
}

/// Validates rows through a [`Dispatcher`], expanding GeometryCollections one level deep.
#[derive(Debug, Clone)]
pub struct ValidityEngine<K> {
    dispatcher: Dispatcher<K>,
}

impl<K: GeometryKernel> ValidityEngine<K> {
    pub fn new(dispatcher: Dispatcher<K>) -> Self {
        Self { dispatcher }
    }

    pub fn dispatcher(&self) -> &Dispatcher<K> {
        &self.dispatcher
    }

    pub fn validate(&self, text: Option<&str>) -> ValidityResult {
        match text {
            None => ValidityResult::missing(),
            Some(text) if GeometryKind::from_wkt(text) == GeometryKind::GeometryCollection => {
                self.validate_collection(text)
            }
            Some(text) => self.validate_single(text),
        }
    }

    fn validate_single(&self, text: &str) -> ValidityResult {
        match self.dispatcher.validity(text) {
            Ok(Ok(())) => ValidityResult::valid(),
            Ok(Err(failure)) => ValidityResult::invalid(failure.message()),
            Err(err) => ValidityResult::invalid(err.to_string()),
        }
    }

    /// Members are checked in order and the first failing member decides the result.
    fn validate_collection(&self, text: &str) -> ValidityResult {
        let members = split_collection(text);
        if members.is_empty() {
            return ValidityResult::invalid(NO_MEMBERS);
        }

        for member in &members {
            let result = match GeometryKind::from_wkt(member) {
                GeometryKind::GeometryCollection => ValidityResult::invalid(NESTED_COLLECTION),
                GeometryKind::Unsupported => ValidityResult::invalid(UNRECOGNISED_MEMBER),
                _ => self.validate_single(member),
            };
            if !result.passed() {
                return result;
            }
        }
        ValidityResult::valid()
    }
}
