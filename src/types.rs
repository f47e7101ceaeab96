use serde::{Deserialize, Serialize};

use crate::analysis::Zone;
use crate::error::RequestError;

/// Body of `POST /classify`.
///
/// `width` and `height` are the dimensions the caller normalized against;
/// the decoded image's own dimensions stay authoritative for pixel math.
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub image: String,
    pub width: u32,
    pub height: u32,
    pub cells: Vec<CellSpec>,
}

impl ClassifyRequest {
    /// Structural checks the pipeline assumes have already happened.
    pub fn validate(&self) -> Result<(), RequestError> {
        for cell in &self.cells {
            if cell.points.is_empty() {
                return Err(RequestError::EmptyCell(cell.id));
            }
        }
        Ok(())
    }
}

/// One declared cell: an id plus normalized polygon vertices.
#[derive(Debug, Clone, Deserialize)]
pub struct CellSpec {
    pub id: i64,
    pub points: Vec<(f64, f64)>,
}

/// One classified cell, emitted in request order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellPosition {
    pub id: i64,
    pub position: Zone,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_from_json() {
        let request: ClassifyRequest = serde_json::from_str(
            r#"{
                "image": "aGVsbG8=",
                "width": 640,
                "height": 480,
                "cells": [
                    { "id": 1, "points": [[0.1, 0.2], [0.3, 0.4]] }
                ]
            }"#,
        )
        .expect("Failed to deserialize request");

        assert_eq!(request.cells.len(), 1);
        assert_eq!(request.cells[0].id, 1);
        assert_eq!(request.cells[0].points, vec![(0.1, 0.2), (0.3, 0.4)]);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_cell_without_vertices_fails_validation() {
        let request: ClassifyRequest = serde_json::from_str(
            r#"{
                "image": "aGVsbG8=",
                "width": 640,
                "height": 480,
                "cells": [
                    { "id": 1, "points": [[0.1, 0.2]] },
                    { "id": 9, "points": [] }
                ]
            }"#,
        )
        .unwrap();

        let err = request.validate().unwrap_err();
        assert_eq!(err.to_string(), "Cell 9 has no vertices");
    }

    #[test]
    fn test_position_serializes_with_lowercase_label() {
        let position = CellPosition {
            id: 4,
            position: Zone::Welcome,
        };
        assert_eq!(
            serde_json::to_string(&position).unwrap(),
            r#"{"id":4,"position":"welcome"}"#
        );
    }
}
