pub mod auth;
pub mod banner;
pub mod booking;
pub mod offering;
pub mod payment;
pub mod promotion;
pub mod user;

// API 上の金額はドル単位の数値、内部表現はセント
pub(crate) fn to_cents(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

pub(crate) fn to_price(cents: i64) -> f64 {
    cents as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_is_converted_to_cents_and_back() {
        assert_eq!(to_cents(49.0), 4900);
        assert_eq!(to_cents(49.99), 4999);
        assert_eq!(to_price(4999), 49.99);
    }
}
