use std::process;

fn main() {
    match mddoc_cli::run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("mddoc error: {err:#}");
            process::exit(1);
        }
    }
}
