//! Built-in token patterns for the previous brand.
//!
//! Keep this list in step with [`crate::brand`]: when the brand data moves on,
//! the strings it replaced belong here.

pub const DEFAULT_TOKENS: &[&str] = &[
    // Company names
    r"island\s*drains",
    r"island\s*drains\s*&\s*excavation",
    r"islanddrainsandexcavation",
    r"\bide\b",
    // Domains
    r"islanddrainsandexcavation\.ca",
    r"www\.islanddrainsandexcavation\.ca",
    // Contact info
    r"250[\s\-\.]?818[\s\-\.]?5611",
    r"\+1[\s\-\.]?250[\s\-\.]?818[\s\-\.]?5611",
    r"info@islanddrainsandexcavation\.ca",
    // Colors
    r"#0C4A6E",
    r"#FCD34D",
    r"#0369A1",
    // Industry terms
    r"drain\s*cleaning",
    r"excavation\s*services",
    r"perimeter\s*drains",
    r"lift\s*station",
    r"retaining\s*walls",
    // File references
    r"idelogo",
    r"ide.*logo",
    r"herobgfinalide",
    // Business phrases
    r"drainage\s*and\s*excavation",
    r"professional\s*drain\s*services",
];
