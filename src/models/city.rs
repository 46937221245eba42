use serde::{Deserialize, Serialize};

/// A row of the `city` table.
///
/// The API speaks capitalised field names (`ID`, `CountryCode`),
/// so both the column mapping and the JSON shape rename accordingly.
#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct City {
    #[serde(rename = "ID")]
    #[sqlx(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Name")]
    #[sqlx(rename = "Name")]
    pub name: String,
    #[serde(rename = "CountryCode")]
    #[sqlx(rename = "CountryCode")]
    pub country_code: String,
    #[serde(rename = "District")]
    #[sqlx(rename = "District")]
    pub district: String,
    #[serde(rename = "Population")]
    #[sqlx(rename = "Population")]
    pub population: i64,
}

/// Body of `POST /city`. Every field is optional at the deserialization
/// layer; presence is enforced by [`CreateCityRequest::into_city`].
#[derive(Debug, Default, Deserialize)]
pub struct CreateCityRequest {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "CountryCode", default)]
    pub country_code: Option<String>,
    #[serde(rename = "District", default)]
    pub district: Option<String>,
    #[serde(rename = "Population", default)]
    pub population: Option<i64>,
}

impl CreateCityRequest {
    /// Apply the presence gate and build the row to insert.
    ///
    /// Applies the truthiness gate over all five fields: a
    /// missing field, an empty string, a zero population, or a zero ID
    /// all reject the request. `None` means "validation failure", not
    /// "server error".
    pub fn into_city(self, id: i64) -> Option<City> {
        if id == 0 {
            return None;
        }
        let name = self.name.filter(|s| !s.is_empty())?;
        let country_code = self.country_code.filter(|s| !s.is_empty())?;
        let district = self.district.filter(|s| !s.is_empty())?;
        let population = self.population.filter(|p| *p != 0)?;
        Some(City {
            id,
            name,
            country_code,
            district,
            population,
        })
    }
}

/// Body of `PUT /city/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateCityRequest {
    #[serde(rename = "Population", default)]
    pub population: Option<i64>,
}

/// Response shape of `GET /city/{name}`: the row without its ID.
#[derive(Debug, Serialize)]
pub struct CityView {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "CountryCode")]
    pub country_code: String,
    #[serde(rename = "District")]
    pub district: String,
    #[serde(rename = "Population")]
    pub population: i64,
}

impl From<City> for CityView {
    fn from(city: City) -> Self {
        Self {
            name: city.name,
            country_code: city.country_code,
            district: city.district,
            population: city.population,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreateCityRequest {
        CreateCityRequest {
            name: Some("Sherpur".into()),
            country_code: Some("BGD".into()),
            district: Some("Sherpur".into()),
            population: Some(1_543_000),
        }
    }

    #[test]
    fn complete_request_builds_a_row() {
        let city = full_request().into_city(4089).expect("all fields present");
        assert_eq!(city.id, 4089);
        assert_eq!(city.name, "Sherpur");
        assert_eq!(city.population, 1_543_000);
    }

    #[test]
    fn missing_field_is_rejected() {
        let request = CreateCityRequest {
            district: None,
            ..full_request()
        };
        assert!(request.into_city(1).is_none());
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let request = CreateCityRequest {
            name: Some(String::new()),
            ..full_request()
        };
        assert!(request.into_city(1).is_none());
    }

    #[test]
    fn zero_population_is_rejected() {
        let request = CreateCityRequest {
            population: Some(0),
            ..full_request()
        };
        assert!(request.into_city(1).is_none());
    }

    #[test]
    fn city_serializes_with_wire_names() {
        let city = full_request().into_city(4089).unwrap();
        let json = serde_json::to_value(&city).unwrap();
        assert_eq!(json["ID"], 4089);
        assert_eq!(json["CountryCode"], "BGD");
    }

    #[test]
    fn view_drops_the_id() {
        let view = CityView::from(full_request().into_city(4089).unwrap());
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("ID").is_none());
        assert_eq!(json["Name"], "Sherpur");
    }
}
