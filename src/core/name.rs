use getset::Getters;
use serde::Serialize;

/******************************************************************************/
/* Name record                                                                */
/******************************************************************************/

/// A first name / last name pair read from a tabular data file. Field names
/// follow the JSON shape served by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct NameRecord {
    #[getset(get = "pub")]
    #[serde(rename = "nombre")]
    first_name: String,
    #[getset(get = "pub")]
    #[serde(rename = "apellido")]
    last_name: String,
}

impl NameRecord {
    pub fn new<F, L>(first_name: F, last_name: L) -> Self
    where
        F: Into<String>,
        L: Into<String>,
    {
        NameRecord {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}
