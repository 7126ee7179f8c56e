use std::io::{self, Write};

use anyhow::Result;
use textscript::{Interpreter, Limits};

pub fn start(limits: Limits) -> Result<()> {
    let mut interpreter = Interpreter::with_limits(Vec::<u8>::new(), limits);
    let mut stdout = io::stdout();

    loop {
        print!(">>");
        stdout.flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            println!();
            return Ok(());
        }

        match input.trim() {
            ":quit" => return Ok(()),
            ":vars" => {
                for (name, value) in interpreter.context().iter() {
                    println!("{} = {:?}", name, value.as_str());
                }
                continue;
            }
            _ => {}
        }

        let result = interpreter.run(&input);

        let output = std::mem::take(interpreter.output_mut());
        stdout.write_all(&output)?;
        if !output.is_empty() && !output.ends_with(b"\n") {
            println!();
        }

        if let Err(err) = result {
            println!("error: {:#}", err);
        }
    }
}
