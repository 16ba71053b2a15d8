// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    let banner = r#"
      _           _ _                                   _
  ___| |__   __ _| | | ___ _ __   __ _  ___   ___  ___ | |_   _____ _ __
 / __| '_ \ / _` | | |/ _ \ '_ \ / _` |/ _ \ / __|/ _ \| \ \ / / _ \ '__|
| (__| | | | (_| | | |  __/ | | | (_| |  __/ \__ \ (_) | |\ V /  __/ |
 \___|_| |_|\__,_|_|_|\___|_| |_|\__, |\___| |___/\___/|_| \_/ \___|_|
                                 |___/

    Engineering Challenge Coach
"#;
    println!("{}", banner);
}
