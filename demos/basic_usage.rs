// ============================================================================
// Basic Usage Example
// ============================================================================

use teaching_calculator::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Teaching Calculator Example ===\n");

    let literal = Calculator::new();
    let standard = Calculator::with_config(CalculatorConfig::standard());

    println!("Arithmetic contracts:");
    println!("  literal  add(2, 3)      = {}", literal.add(2, 3)?);
    println!("  standard add(2, 3)      = {}", standard.add(2, 3)?);
    println!("  literal  multiply(3, 4) = {}", literal.multiply(3, 4)?);
    println!("  standard multiply(3, 4) = {}", standard.multiply(3, 4)?);

    println!("\nNumeric utilities:");
    println!("  divide(10, 4)      = {}", standard.divide(10, 4)?);
    println!("  power(2, 10)       = {}", standard.power(2, 10)?);
    println!("  square_root(2)     = {}", standard.square_root(2)?);
    println!("  factorial(10)      = {}", standard.factorial(10)?);
    println!("  modulo(-7, 3)      = {}", standard.modulo(-7, 3)?);
    println!("  absolute(-2.5)     = {}", standard.absolute(-2.5)?);
    println!("  percentage(80, 25) = {}", standard.percentage(80, 25));
    println!("  is_even(42)        = {}", standard.is_even(42)?);

    let floored = Calculator::with_config(
        CalculatorConfig::standard().with_remainder(RemainderConvention::Floored),
    );
    println!("  floored modulo(-7, 3) = {}", floored.modulo(-7, 3)?);

    println!("\nDecimal boundary:");
    let price: Number = "19.99".parse()?;
    let discounted = standard.percentage(price, 85);
    println!(
        "  85% of {} = {}",
        price,
        Number::from(discounted).to_decimal()?.round_dp(2)
    );

    println!("\nRejected calls:");
    let rejected = [
        standard.divide(10, 0).map(|v| v.to_string()),
        standard.factorial(-5).map(|v| v.to_string()),
        standard.factorial(4.0).map(|v| v.to_string()),
        standard.is_odd(3.5).map(|v| v.to_string()),
        standard.power(2, -1).map(|v| v.to_string()),
    ];
    for result in rejected {
        if let Err(err) = result {
            println!("  {} -> {}", err.operation(), err);
        }
    }

    Ok(())
}
