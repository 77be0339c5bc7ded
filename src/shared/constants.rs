/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// VALIDATION MESSAGES
// =============================================================================

/// Returned when a tax id is neither a valid CPF nor a valid CNPJ
pub const INVALID_TAX_ID_MESSAGE: &str = "Invalid CPF or CNPJ";

/// Returned when agricultural + vegetation area exceeds the total area
pub const INVALID_TOTAL_AREA_MESSAGE: &str = "Invalid total area";

pub const PRODUCER_NOT_FOUND_MESSAGE: &str = "Producer not found";
