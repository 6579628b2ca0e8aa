// ============================================================================
// Basic Usage Example
// ============================================================================

use precise_decimal::numeric::precise;
use precise_decimal::prelude::*;

fn main() -> Result<(), PreciseError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Precise Decimal Example ===\n");

    // Three markets, one per precision convention
    let spot = MarketPrecision::decimal_places_style(4, 2)?;
    let sig = MarketPrecision::significant_digits_style(5, 5)?;
    let futures = MarketPrecision::tick_size_style("0.001", "0.5")?.with_padding(true);

    let price: DecimalValue = "38567.3456".parse()?;
    let amount: DecimalValue = "0.123456".parse()?;

    for (name, market) in [("spot", &spot), ("sig-digits", &sig), ("futures", &futures)] {
        let p = price_to_precision(&price, market)?;
        let a = amount_to_precision(&amount, market)?;
        println!("{:<11} price {:>12}  amount {:>9}  cost {}", name, p, a, &p * &a);
    }

    // Raw exchange fields combined without float drift
    println!("\nString math:");
    println!("  0.1 * 3          = {}", precise::string_mul("0.1", "3")?);
    println!("  1.00000000 - fee = {}", precise::string_sub("1.00000000", "0.0005")?);
    println!("  1 / 3 (8 places) = {}", precise::string_div("1", "3", 8)?);

    // A quantity too small for the market is rejected, not zeroed
    println!("\nUnderflow guard:");
    let dust: DecimalValue = "0.00000001".parse()?;
    match amount_to_precision(&dust, &spot) {
        Ok(amount) => println!("  accepted {}", amount),
        Err(err) => println!("  rejected: {}", err),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
