use vector_output_gen::{cli::Opts, trace};

fn main() {
    let opts = match Opts::get_matches() {
        Ok(opts) => opts,
        Err(error) => {
            // Printing help or version is not an error.
            let code = if error.use_stderr() {
                exitcode::USAGE
            } else {
                exitcode::OK
            };
            let _ = error.print();
            std::process::exit(code);
        }
    };

    trace::init(
        opts.root.use_color(),
        opts.root.json_logs(),
        opts.log_level(),
    );

    let code = opts.sub_command.execute();
    std::process::exit(code);
}
