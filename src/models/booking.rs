use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;

/// A validated booking: occupant, interval and optional metadata.
///
/// The constructor is the write boundary for the interval invariant
/// (both bounds present, start strictly before end). Both the full and
/// the quick booking paths must go through it, so a Reserved/Occupied
/// room can never be stored with a ragged or inverted interval.
#[derive(Debug, Clone)]
pub struct Booking {
    pub occupant: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub rate: Option<f64>,
    pub identity_document: Option<String>,
    pub address: Option<String>,
    pub agent: Option<String>,
    pub notes: Option<String>,
}

impl Booking {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        occupant: String,
        start: NaiveDateTime,
        end: NaiveDateTime,
        rate: Option<f64>,
        identity_document: Option<String>,
        address: Option<String>,
        agent: Option<String>,
        notes: Option<String>,
    ) -> AppResult<Self> {
        if start >= end {
            return Err(AppError::InvalidInterval(format!(
                "start ({start}) must be before end ({end})"
            )));
        }

        Ok(Self {
            occupant,
            start,
            end,
            rate,
            identity_document,
            address,
            agent,
            notes,
        })
    }

    /// Quick bookings carry no metadata: rate, identity, address, agent
    /// and notes are cleared on write.
    pub fn bare(occupant: String, start: NaiveDateTime, end: NaiveDateTime) -> AppResult<Self> {
        Self::new(occupant, start, end, None, None, None, None, None)
    }

    /// Parse a rate accepting both decimal separators ("15000,50" or
    /// "15000.50"). Empty input means no rate.
    pub fn parse_rate(input: Option<&str>) -> AppResult<Option<f64>> {
        match input {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => s
                .replace(',', ".")
                .parse::<f64>()
                .map(Some)
                .map_err(|_| AppError::InvalidRate(format!(
                    "'{s}' is not a number. Use e.g. 15000 or 15000.50"
                ))),
        }
    }
}
