pub mod constants;
pub mod math_utils;
pub mod plausibility;
pub mod optional_field;
pub mod relation;
pub mod correlation;
pub mod compound_id;
pub mod phase;
pub mod partly_known_compound;
pub mod completed_compound;
pub mod samples;
pub mod infer;
pub mod polymorph;
pub mod speculate;
pub mod complete;
pub mod table;
pub mod table_json;
pub mod catalog;
pub mod reference_data;
