pub mod workout;

pub use workout::{
    Calculation, CalculationKind, Element, Interval, Metadata, Repetition, Workout, Zone,
};
