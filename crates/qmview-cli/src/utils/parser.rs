use qmview::core::models::atom::Element;
use qmview::core::models::gate::GateKind;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid {what} '{item}' in list '{list}'.")]
    InvalidItem {
        what: &'static str,
        item: String,
        list: String,
    },

    #[error("The {0} list cannot be empty.")]
    Empty(&'static str),
}

/// Parses a comma-separated list such as `C,O,N` or `H, RY, CNOT`.
fn parse_list<T: FromStr>(list: &str, what: &'static str) -> Result<Vec<T>, ParseError> {
    let items = list
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse().map_err(|_| ParseError::InvalidItem {
                what,
                item: item.to_string(),
                list: list.to_string(),
            })
        })
        .collect::<Result<Vec<T>, _>>()?;
    if items.is_empty() {
        return Err(ParseError::Empty(what));
    }
    Ok(items)
}

pub fn parse_element_list(list: &str) -> Result<Vec<Element>, ParseError> {
    parse_list(list, "element")
}

pub fn parse_gate_list(list: &str) -> Result<Vec<GateKind>, ParseError> {
    parse_list(list, "gate")
}
