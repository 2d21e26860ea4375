use std::io::Write;

use libdeassembler::Deassembler;
use libemulator::{Emulator, ExecuteErr, ExecuteOk};
use libisa::{Address, MEMORY_SIZE};

use crate::command::{Command, CommandError};

#[cfg(test)]
mod tests;

const DEFAULT_BREAK_LIMIT: usize = 100_000;
const DUMP_ROW_LEN: usize = 16;

#[derive(Debug, PartialEq, Eq)]
pub enum MonitorFlow {
    Continue,
    Quit,
}

/// Interactive stepping front-end, reads commands until `q` or end of input.
pub fn run<O>(emulator: &mut Emulator<O>) -> anyhow::Result<()>
where
    O: Write,
{
    loop {
        println!(
            "<<<   PC: {:02X}, GPRs: {:02X?}, FL: {:03b}   >>>",
            emulator.pc,
            emulator.reg_file.array_clone(),
            emulator.alu.flags.bits(),
        );

        let Some(command) = Command::prompt()? else {
            return Ok(());
        };

        match execute_command(&command, emulator) {
            Ok(MonitorFlow::Quit) => return Ok(()),
            Ok(MonitorFlow::Continue) => {}
            Err(e) => eprintln!("!> {:#}", e),
        }
    }
}

pub fn execute_command<O>(
    command: &Command,
    emulator: &mut Emulator<O>,
) -> anyhow::Result<MonitorFlow>
where
    O: Write,
{
    let mut args = command.args();

    let name = match args.next() {
        Ok(name) => name,
        // Blank line
        Err(_) => return Ok(MonitorFlow::Continue),
    };

    match name {
        "s" => {
            let instruction_count = args.next_parsed_or(1usize)?;

            for _ in 0..instruction_count {
                if step(emulator)? == ExecuteOk::Halted {
                    println!("Halted");
                    break;
                }
            }
        }
        "r" => {
            emulator.execute_to_halt().map_err(|e| fault(e, emulator.pc))?;
            println!("Halted");
        }
        "b" => {
            let break_pc: Address = args.next_parsed()?;
            let instruction_limit = args.next_parsed_or(DEFAULT_BREAK_LIMIT)?;

            let mut executed_instructions = 0;
            while emulator.pc != break_pc {
                if executed_instructions >= instruction_limit {
                    eprintln!(
                        "Didn't reach breakpoint by {} executed instructions",
                        executed_instructions
                    );
                    return Ok(MonitorFlow::Continue);
                }

                executed_instructions += 1;
                if step(emulator)? == ExecuteOk::Halted {
                    println!("Halted after {} instructions", executed_instructions);
                    return Ok(MonitorFlow::Continue);
                }
            }

            println!("Executed {} instructions", executed_instructions);
        }
        "d" => {
            let begin = args.next_parsed_or(0usize)?.min(MEMORY_SIZE);
            let length = args.next_parsed_or(MEMORY_SIZE)?;
            let end = begin.saturating_add(length).min(MEMORY_SIZE);

            let bytes: Vec<_> = (begin..end)
                .filter_map(|addr| emulator.memory.get(addr))
                .collect();

            for (row, chunk) in bytes.chunks(DUMP_ROW_LEN).enumerate() {
                println!("{:02X}: {:02X?}", begin + row * DUMP_ROW_LEN, chunk);
            }
        }
        "l" => {
            let begin: Address = args.next_parsed_or(emulator.pc)?;
            let count = args.next_parsed_or(8usize)?;

            Deassembler::new(emulator.memory.slice_from(begin).iter())
                .take(count)
                .for_each(|(offset, instruction)| {
                    let text = match instruction {
                        Ok(instruction) => instruction.to_string(),
                        Err(e) => format!("<{}>", e),
                    };
                    println!("{:02X}: {}", begin as usize + offset, text);
                });
        }
        "regs" => {
            for (index, value) in emulator.reg_file.iter().enumerate() {
                println!("R{}: {:02X} ({})", index, value, value);
            }
            println!("SP: {:02X}", emulator.reg_file.stack_pointer());
            println!("PC: {:02X}", emulator.pc);
            println!("FL: {:?}", emulator.alu.flags);
        }
        "q" => return Ok(MonitorFlow::Quit),
        unknown => return Err(CommandError::UnknownCommand(unknown.to_string()).into()),
    }

    let unused_arg_count = args.remaining();
    if unused_arg_count != 0 {
        eprintln!("{} unused command arguments!", unused_arg_count);
    }

    Ok(MonitorFlow::Continue)
}

fn step<O>(emulator: &mut Emulator<O>) -> anyhow::Result<ExecuteOk>
where
    O: Write,
{
    emulator
        .execute_instruction()
        .map_err(|e| fault(e, emulator.pc))
}

fn fault(error: ExecuteErr, pc: Address) -> anyhow::Error {
    anyhow::Error::new(error).context(format!("Fault at {:#04X}", pc))
}
