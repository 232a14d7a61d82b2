use serde::Deserialize;

use application::transfer::CalculateIncomeDto;

#[derive(Debug, Deserialize)]
pub struct IncomeRequest {
    year: Option<i32>,
    #[serde(default)]
    include_incomplete_rentals: bool,
}

impl From<IncomeRequest> for CalculateIncomeDto {
    fn from(value: IncomeRequest) -> Self {
        Self {
            year: value.year,
            include_open_rentals: value.include_incomplete_rentals,
        }
    }
}
