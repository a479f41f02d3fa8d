use std::io;

use rusty_stats::calc::Calculator;

fn main() -> io::Result<()> {
    env_logger::init();

    let mut calc = Calculator::new(io::stdin().lock(), io::stdout());
    calc.run()
}
