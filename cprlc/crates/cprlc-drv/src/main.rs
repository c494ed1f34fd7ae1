use std::process::ExitCode;

fn main() -> ExitCode {
    cprlc_drv::main()
}
