use super::circuit::CircuitLayout;
use serde::{Deserialize, Serialize};

/// Energy as the dashboard currently shows it, in Hartree.
///
/// While `converging` is set the value is provisional (the last settled figure) and
/// consumers should not present it as the result of the latest configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyReading {
    pub value: f64,
    pub converging: bool,
}

impl EnergyReading {
    pub fn settled(value: f64) -> Self {
        Self {
            value,
            converging: false,
        }
    }

    pub fn provisional(value: f64) -> Self {
        Self {
            value,
            converging: true,
        }
    }

    /// Display label, e.g. `E = -1.8562 Ha`, or `E = ... Ha` while converging.
    pub fn label(&self) -> String {
        if self.converging {
            "E = ... Ha".to_string()
        } else {
            format!("E = {:.4} Ha", self.value)
        }
    }
}

/// The circuit display model: the gate matrix plus the energy reading shown with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitDisplayModel {
    #[serde(flatten)]
    pub layout: CircuitLayout,
    pub energy: EnergyReading,
}

impl CircuitDisplayModel {
    pub fn new(layout: CircuitLayout, energy: EnergyReading) -> Self {
        Self { layout, energy }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::gate::{GateKind, GatePlacement};

    #[test]
    fn label_shows_four_decimals_once_settled() {
        assert_eq!(EnergyReading::settled(-1.856_249).label(), "E = -1.8562 Ha");
    }

    #[test]
    fn label_hides_value_while_converging() {
        assert_eq!(EnergyReading::provisional(-1.8562).label(), "E = ... Ha");
    }

    #[test]
    fn display_model_serializes_flat() {
        let layout =
            CircuitLayout::from_columns(1, vec![vec![GatePlacement::single(GateKind::H, 0, 0)]])
                .unwrap();
        let model = CircuitDisplayModel::new(layout, EnergyReading::provisional(-1.8));
        let value = serde_json::to_value(&model).unwrap();
        assert_eq!(value["qubitCount"], 1);
        assert_eq!(value["depth"], 1);
        assert_eq!(value["placements"][0][0]["kind"], "H");
        assert_eq!(value["energy"]["converging"], true);
    }
}
