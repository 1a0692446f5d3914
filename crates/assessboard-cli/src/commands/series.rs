use assessboard_core::comparison_series;

pub fn run(percentile: u32, json: bool) {
    let series = comparison_series(percentile);

    if json {
        match serde_json::to_string_pretty(&series) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Failed to serialize series: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!("{:>10}  {:>5}", "percentile", "count");
    for point in &series {
        let marker = if point.is_user { "  ◀ you" } else { "" };
        println!("{:>10}  {:>5}{marker}", point.percentile, point.count);
    }
}
