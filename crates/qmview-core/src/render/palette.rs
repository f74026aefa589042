use crate::core::models::atom::Element;

/// CPK-style fill color of an element.
pub fn element_color(element: Element) -> &'static str {
    match element {
        Element::Carbon => "#909090",
        Element::Oxygen => "#FF0D0D",
        Element::Nitrogen => "#3050F8",
        Element::Hydrogen => "#FFFFFF",
    }
}

/// Drawn atom radius, in canvas units.
pub fn element_radius(element: Element) -> f64 {
    match element {
        Element::Carbon => 8.0,
        Element::Oxygen | Element::Nitrogen => 7.0,
        Element::Hydrogen => 4.0,
    }
}
