pub mod constants;
pub mod body;
pub mod catalog;
pub mod horizon;
pub mod rate;
pub mod kinematics;
pub mod observer;
pub mod comparison;
pub mod visual;
pub mod report;
pub mod math_utils;
