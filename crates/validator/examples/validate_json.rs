//! Validates a JSON document read from stdin and prints the tagged outcome.
//!
//! ```sh
//! echo '{"title":"","contact":{"email":"bad"}}' \
//!     | cargo run -p nuisance-validator --example validate_json
//! ```

use std::io::Read;

use nuisance_validator::prelude::*;
use serde_json::Value;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw)?;
    let input: Value = serde_json::from_str(&raw)?;

    let validator = Validator::new(
        object()
            .required("title", non_empty().max_length(120).forbid_chars("<>"))
            .required("location", geo_point())
            .optional("intensity", integer().range(1, 5))
            .optional("contact", object().required("email", email()))
            .optional("tags", each(one_of(["noise", "odour", "light"])).max_items(3)),
    );

    let outcome: Outcome<Value> = validator.check(&input).map(|()| input).into();
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
