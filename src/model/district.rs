use crate::error::ConstructionError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DistrictData {
    #[serde(rename = "numberOfSeats")]
    pub number_of_seats: Option<i64>,
    pub name: Option<String>,
}

impl DistrictData {
    pub fn new(number_of_seats: i64) -> Self {
        DistrictData {
            number_of_seats: Some(number_of_seats),
            name: None,
        }
    }

    pub fn named(number_of_seats: i64, name: &str) -> Self {
        DistrictData {
            number_of_seats: Some(number_of_seats),
            name: Some(name.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct District {
    pub id: usize,
    #[serde(rename = "numberOfSeats")]
    pub number_of_seats: u32,
    pub name: String,
}

impl District {
    /// Build the district at position `id`, naming it `District <id+1>`
    /// unless a name is given.
    pub fn new(id: usize, data: DistrictData) -> Result<District, ConstructionError> {
        let name = match data.name {
            Some(name) if !name.is_empty() => name,
            _ => format!("District {}", id + 1),
        };

        let seats = data
            .number_of_seats
            .ok_or_else(|| ConstructionError::MissingSeats {
                district: name.clone(),
            })?;
        let number_of_seats =
            u32::try_from(seats).map_err(|_| ConstructionError::NegativeSeats {
                district: name.clone(),
                seats,
            })?;

        Ok(District {
            id,
            number_of_seats,
            name,
        })
    }
}
