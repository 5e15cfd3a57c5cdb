// demos/validation_demo.rs
use options_pricer::{price_option, Contract, OptionType, PricerError};

fn main() {
    println!("Boundary validation demo for options-pricer");
    println!("============================================\n");

    // The kernel never fails: a zero expiry simply produces NaN.
    println!("1. Unchecked kernel with T = 0...");
    let raw = price_option(100.0, 100.0, 0.05, 0.20, 0.0, OptionType::Call);
    println!("   price_option returned {}", raw);

    // Callers that care check at the boundary.
    println!("\n2. Checked pricing with T = 0...");
    let expired = Contract::new(100.0, 100.0, 0.05, 0.20, 0.0, OptionType::Call);
    match expired.try_price() {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    println!("\n3. Negative volatility...");
    let negative_vol = Contract::new(100.0, 100.0, 0.05, -0.20, 1.0, OptionType::Put);
    match negative_vol.validate() {
        Err(PricerError::InvalidParameter { parameter, value, .. }) => {
            println!("   ✓ '{}' rejected (value {})", parameter, value)
        }
        other => println!("   Unexpected: {:?}", other),
    }

    println!("\n4. Negative rate is allowed...");
    let negative_rate = Contract::new(100.0, 100.0, -0.01, 0.20, 1.0, OptionType::Call);
    match negative_rate.try_price() {
        Ok(price) => println!("   ✓ Priced at {:.4}", price),
        Err(e) => println!("   Unexpected: {}", e),
    }

    println!("\n5. Parsing option types...");
    for text in ["CALL", "p", "straddle"] {
        match text.parse::<OptionType>() {
            Ok(option_type) => println!("   '{}' -> {}", text, option_type),
            Err(e) => println!("   ✓ Caught error: {}", e),
        }
    }
}
