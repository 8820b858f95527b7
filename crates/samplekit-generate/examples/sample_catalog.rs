use samplekit_core::ReferenceCatalog;
use samplekit_generate::SamplingEngine;

fn main() {
    let catalog = match ReferenceCatalog::from_entries([
        ("Audi", vec!["A3", "A4"]),
        ("Volvo", vec!["S60"]),
    ]) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("invalid catalog: {err}");
            std::process::exit(1);
        }
    };

    let mut engine = SamplingEngine::from_entropy();
    match engine.sample_category_pairs(&catalog, 5) {
        Ok(pairs) => {
            for pair in pairs {
                println!("{pair}");
            }
        }
        Err(err) => eprintln!("sampling failed: {err}"),
    }
}
