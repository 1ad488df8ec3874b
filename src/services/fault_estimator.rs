//! Rule-based fault estimator
//!
//! Deterministic symptom-to-diagnosis calculator: no I/O, no randomness.
//! The questionnaire flow in the mobile apps feeds it, but nothing here
//! depends on that. The estimate is advisory only and always ships with a
//! fixed disclaimer.
//!
//! Classification precedence is deliberate: the battery check runs before
//! the noise check, so a vehicle that both fails to start with a dashboard
//! warning *and* makes a knocking noise is classified as a battery issue.

use serde::{Deserialize, Serialize};

pub const FAULT_NORMAL: &str = "Normal";
pub const FAULT_BATTERY: &str = "Battery Issue";
pub const FAULT_ENGINE_NOISE: &str = "Engine Noise";

pub const DISCLAIMER: &str =
    "This is an estimated cost. Final price may vary after mechanic inspection.";

/// Vehicle category used for cost scaling
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VehicleCategory {
    Bike,
    Car,
    Truck,
}

impl VehicleCategory {
    fn cost_factor(&self) -> f64 {
        match self {
            VehicleCategory::Bike => 1.0,
            VehicleCategory::Car => 1.5,
            VehicleCategory::Truck => 2.0,
        }
    }
}

/// Locality of the breakdown, used for cost scaling
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Locality {
    City,
    Suburb,
    Rural,
}

impl Locality {
    fn cost_factor(&self) -> f64 {
        match self {
            Locality::City => 1.2,
            Locality::Suburb => 1.0,
            Locality::Rural => 0.9,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Symptom inputs collected from the questionnaire
#[derive(Debug, Clone, Deserialize)]
pub struct SymptomInput {
    pub engine_starts: bool,
    pub battery_warning: bool,
    pub noise_type: String,
    pub category: VehicleCategory,
    pub locality: Locality,
}

/// Advisory diagnosis result
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Diagnosis {
    pub fault: String,
    pub severity: Severity,
    pub estimated_cost: i64,
    pub disclaimer: String,
}

/// Classify the fault. Battery takes precedence over noise.
pub fn predict_fault(engine_starts: bool, battery_warning: bool, noise_type: &str) -> &'static str {
    let noise_type = noise_type.to_lowercase();

    if !engine_starts && battery_warning {
        return FAULT_BATTERY;
    }
    if noise_type == "knocking" || noise_type == "grinding" {
        return FAULT_ENGINE_NOISE;
    }

    FAULT_NORMAL
}

/// Fixed fault-to-severity table
pub fn determine_severity(fault: &str) -> Severity {
    match fault {
        FAULT_BATTERY => Severity::Medium,
        FAULT_ENGINE_NOISE => Severity::High,
        _ => Severity::Low,
    }
}

/// Base cost × vehicle-category factor × locality factor, rounded to the
/// nearest whole currency unit. Unrecognized fault labels cost 0.
pub fn estimate_cost(fault: &str, category: VehicleCategory, locality: Locality) -> i64 {
    let base = match fault {
        FAULT_NORMAL => 50.0,
        FAULT_BATTERY => 150.0,
        FAULT_ENGINE_NOISE => 300.0,
        _ => 0.0,
    };

    let cost = base * category.cost_factor() * locality.cost_factor();
    cost.round() as i64
}

/// Full diagnosis: fault, severity, cost estimate and disclaimer
pub fn diagnose(input: &SymptomInput) -> Diagnosis {
    let fault = predict_fault(input.engine_starts, input.battery_warning, &input.noise_type);
    let severity = determine_severity(fault);
    let estimated_cost = estimate_cost(fault, input.category, input.locality);

    Diagnosis {
        fault: fault.to_string(),
        severity,
        estimated_cost,
        disclaimer: DISCLAIMER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(
        engine_starts: bool,
        battery_warning: bool,
        noise_type: &str,
        category: VehicleCategory,
        locality: Locality,
    ) -> SymptomInput {
        SymptomInput {
            engine_starts,
            battery_warning,
            noise_type: noise_type.to_string(),
            category,
            locality,
        }
    }

    #[test]
    fn test_battery_issue_for_car_in_city() {
        // round(150 * 1.5 * 1.2) = 270
        let diagnosis = diagnose(&input(false, true, "none", VehicleCategory::Car, Locality::City));
        assert_eq!(diagnosis.fault, FAULT_BATTERY);
        assert_eq!(diagnosis.severity, Severity::Medium);
        assert_eq!(diagnosis.estimated_cost, 270);
        assert_eq!(diagnosis.disclaimer, DISCLAIMER);
    }

    #[test]
    fn test_engine_noise_for_truck_in_rural() {
        // round(300 * 2.0 * 0.9) = 540
        let diagnosis = diagnose(&input(true, false, "Grinding", VehicleCategory::Truck, Locality::Rural));
        assert_eq!(diagnosis.fault, FAULT_ENGINE_NOISE);
        assert_eq!(diagnosis.severity, Severity::High);
        assert_eq!(diagnosis.estimated_cost, 540);
    }

    #[test]
    fn test_battery_check_wins_over_noise() {
        // Both symptom groups present: the battery branch is evaluated first
        let fault = predict_fault(false, true, "knocking");
        assert_eq!(fault, FAULT_BATTERY);
    }

    #[test]
    fn test_noise_matching_is_case_insensitive() {
        assert_eq!(predict_fault(true, false, "KNOCKING"), FAULT_ENGINE_NOISE);
        assert_eq!(predict_fault(true, false, "Grinding"), FAULT_ENGINE_NOISE);
        assert_eq!(predict_fault(true, false, "humming"), FAULT_NORMAL);
    }

    #[test]
    fn test_no_start_without_warning_is_not_a_battery_issue() {
        assert_eq!(predict_fault(false, false, "none"), FAULT_NORMAL);
    }

    #[test]
    fn test_unknown_fault_has_low_severity_and_zero_base_cost() {
        assert_eq!(determine_severity("Flat Tire"), Severity::Low);
        assert_eq!(estimate_cost("Flat Tire", VehicleCategory::Truck, Locality::City), 0);
    }

    #[test]
    fn test_normal_bike_in_suburb_pays_base_cost() {
        assert_eq!(estimate_cost(FAULT_NORMAL, VehicleCategory::Bike, Locality::Suburb), 50);
    }

    #[test]
    fn test_diagnose_is_deterministic() {
        let sample = input(false, true, "none", VehicleCategory::Car, Locality::City);
        assert_eq!(diagnose(&sample), diagnose(&sample));
    }

    #[test]
    fn test_cost_is_never_negative() {
        for fault in [FAULT_NORMAL, FAULT_BATTERY, FAULT_ENGINE_NOISE, "garbage"] {
            for category in [VehicleCategory::Bike, VehicleCategory::Car, VehicleCategory::Truck] {
                for locality in [Locality::City, Locality::Suburb, Locality::Rural] {
                    assert!(estimate_cost(fault, category, locality) >= 0);
                }
            }
        }
    }
}
