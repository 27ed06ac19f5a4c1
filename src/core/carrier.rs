use crate::domain::model::{Carrier, Gtin};

/// Infers the barcode symbology from how many leading zeros pad the GTIN.
///
/// Counts of 5 and 7 or more have no known carrier.
pub fn carrier_of(gtin: &Gtin) -> Carrier {
    let zeroes = gtin.digits().iter().take_while(|&&d| d == 0).count();
    match zeroes {
        0 => Carrier::Itf14,
        1 => Carrier::Ean13,
        2..=4 => Carrier::UpcA,
        6 => Carrier::Ean8,
        _ => Carrier::Unknown,
    }
}
