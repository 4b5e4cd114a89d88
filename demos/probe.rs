use argot::ArgumentParser;

// Try: cargo run --example probe -- "[alpha]" --mode fast -j 4 --verbose "[beta]"
fn main() {
    let parser = ArgumentParser::from_env();

    let mode = parser.string_argument("mode", 'm').unwrap_or("default");
    let jobs = parser.int_argument_or("jobs", 'j', 1);
    let verbose = parser.switch_argument("verbose");

    println!("mode: {mode}");
    println!("jobs: {jobs}");
    println!("verbose: {verbose}");
    println!("items: {:?}", parser.items());
}
