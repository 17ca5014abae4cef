// src/domain/vehicle.rs
use crate::sheets::RawRow;
use chrono::NaiveDateTime;

/// Lifecycle status of an impounded vehicle. Derived, never stored: it is
/// recomputed from the removal timestamp on every refresh and flips on its
/// own as the wall clock advances past the 60-day threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleStatus {
    InYard,
    AuctionEligible,
}

impl VehicleStatus {
    pub fn label(self) -> &'static str {
        match self {
            VehicleStatus::InYard => "No pátio",
            VehicleStatus::AuctionEligible => "Disponível para Leilão",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            VehicleStatus::InYard => "badge badge-green",
            VehicleStatus::AuctionEligible => "badge badge-red",
        }
    }
}

/// One normalized vehicle row. Exists only as an in-memory view: the whole
/// list is rebuilt from the sheet on every page load and discarded after
/// rendering.
#[derive(Debug, Clone)]
pub struct VehicleRecord {
    pub id: String,
    pub plate: String,
    pub model: String,
    pub year: String,
    pub color: String,
    pub location: String,
    pub removed_at: NaiveDateTime,
    pub status: VehicleStatus,
    /// The original row, verbatim, for the detail view.
    pub raw: RawRow,
}
