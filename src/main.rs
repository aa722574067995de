use addition::adder::checked_add;

fn main() {
    // The seed pairs the original example shipped with
    let pairs = [(5i64, 5i64), (2, 3), (-3, 3)];

    for (a, b) in pairs {
        match checked_add(a, b) {
            Ok(total) => println!("{} + {} = {}", a, b, total),
            Err(e) => {
                eprintln!("Addition failed: {}", e);
                std::process::exit(1);
            }
        }
    }
}
