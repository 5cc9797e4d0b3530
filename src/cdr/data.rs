//! Reference data used to fill in call records

/// UK mobile number prefixes, in international form without the "+"
pub const MOBILE_PREFIXES: &[&str] = &[
    "447300", "447400", "447500", "447700", "447711", "447800", "447900", "447956",
];

/// UK mobile network operators
pub const OPERATORS: &[&str] = &[
    "EE",
    "O2",
    "Vodafone",
    "Three",
    "Tesco Mobile",
    "giffgaff",
    "Sky Mobile",
    "Virgin Mobile",
];

/// 8-digit IMEI Type Allocation Codes of common handsets
pub const TYPE_ALLOCATION_CODES: &[&str] = &[
    "35332509", "35391805", "35875505", "86891503", "35209900", "01326300", "35699508",
    "35145120",
];
