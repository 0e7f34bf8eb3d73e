use serde::{Deserialize, Serialize};

const IDENTITY_NUMBER_LENGTH: usize = 11;

/// Capability consulted by the evaluation engine for identity checks and residency.
pub trait IdentityValidator: Send + Sync {
    fn is_valid(&self, identity_number: &str) -> bool;

    /// Country the applicant resolves to, e.g. `"TURKEY"`.
    fn country(&self) -> String;
}

/// Country record resolved for an applicant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryData {
    pub country: String,
}

/// Source of country data backing a validator.
pub trait CountryDataProvider: Send + Sync {
    fn country_data(&self) -> CountryData;
}

/// Provider that always resolves to the same country.
#[derive(Debug, Clone)]
pub struct StaticCountryProvider {
    data: CountryData,
}

impl StaticCountryProvider {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            data: CountryData {
                country: country.into(),
            },
        }
    }
}

impl CountryDataProvider for StaticCountryProvider {
    fn country_data(&self) -> CountryData {
        self.data.clone()
    }
}

/// Validator for 11-character national identity numbers.
///
/// Only the length is checked; checksum verification belongs to an upstream registry.
#[derive(Debug, Clone)]
pub struct NationalIdentityValidator<P> {
    provider: P,
}

impl<P: CountryDataProvider> NationalIdentityValidator<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P: CountryDataProvider> IdentityValidator for NationalIdentityValidator<P> {
    fn is_valid(&self, identity_number: &str) -> bool {
        identity_number.chars().count() == IDENTITY_NUMBER_LENGTH
    }

    fn country(&self) -> String {
        self.provider.country_data().country
    }
}
