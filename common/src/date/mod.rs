pub mod epoch_sentinel;
pub mod iso_millis;

/// Wire format for all approval timestamps: ISO-8601 UTC with exactly
/// three fractional digits, e.g. `2017-02-27T14:23:07.000Z`.
pub const ISO_MILLIS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Value the source systems emit for "no timestamp yet".
pub const EPOCH_SENTINEL: &str = "1970-01-01T00:00:00.000Z";
