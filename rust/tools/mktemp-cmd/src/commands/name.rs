//! Name generation commands

use anyhow::Result;

pub fn run(template: String, count: usize) -> Result<()> {
    for _ in 0..count {
        println!("{}", mktemp::generate_unique_name(&template));
    }
    Ok(())
}

pub fn outcomes(template: String) -> Result<()> {
    println!("{}", mktemp::outcome_count(&template));
    Ok(())
}
