use libemulator::Emulator;
use libisa::image::parse_image;

use crate::command::{Command, CommandError};

use super::{execute_command, MonitorFlow};

const PRINT_72: &str = include_str!("../../tests/programs/print_72.ls8");

fn emulator(image: &str) -> Emulator<Vec<u8>> {
    Emulator::with_output(parse_image(image).unwrap(), Vec::new()).unwrap()
}

fn run(line: &str, emulator: &mut Emulator<Vec<u8>>) -> anyhow::Result<MonitorFlow> {
    execute_command(&Command::from(line), emulator)
}

#[test]
fn step_executes_count() {
    let mut emulator = emulator(PRINT_72);

    assert_eq!(run("s 2", &mut emulator).unwrap(), MonitorFlow::Continue);
    assert_eq!(emulator.pc, 6);
    assert_eq!(emulator.reg(1).unwrap(), 9);
}

#[test]
fn step_stops_at_halt() {
    let mut emulator = emulator(PRINT_72);

    run("s 100", &mut emulator).unwrap();

    assert_eq!(emulator.output, b"72\n");
    assert_eq!(emulator.pc, 11);
}

#[test]
fn break_runs_until_pc() {
    let mut emulator = emulator(PRINT_72);

    run("b 9", &mut emulator).unwrap();

    assert_eq!(emulator.pc, 9);
    assert_eq!(emulator.reg(0).unwrap(), 72);
    assert!(emulator.output.is_empty());
}

#[test]
fn run_goes_to_halt() {
    let mut emulator = emulator(PRINT_72);

    run("r", &mut emulator).unwrap();

    assert_eq!(emulator.output, b"72\n");
}

#[test]
fn faults_carry_the_pc() {
    let mut emulator = emulator("11111111\n");

    let error = run("s", &mut emulator).unwrap_err();

    assert!(format!("{:#}", error).starts_with("Fault at 0x00: Illegal instruction"));
}

#[test]
fn quit_and_blank_lines() {
    let mut emulator = emulator(PRINT_72);

    assert_eq!(run("q", &mut emulator).unwrap(), MonitorFlow::Quit);
    assert_eq!(run("   ", &mut emulator).unwrap(), MonitorFlow::Continue);
}

#[test]
fn unknown_command_is_an_error() {
    let mut emulator = emulator(PRINT_72);

    let error = run("frobnicate", &mut emulator).unwrap_err();

    assert!(matches!(
        error.downcast_ref::<CommandError>(),
        Some(CommandError::UnknownCommand(name)) if name == "frobnicate"
    ));
}

#[test]
fn bad_argument_is_an_error() {
    let mut emulator = emulator(PRINT_72);

    let error = run("b nowhere", &mut emulator).unwrap_err();

    assert!(matches!(
        error.downcast_ref::<CommandError>(),
        Some(CommandError::ParseError(_))
    ));
    assert_eq!(emulator.pc, 0);
}

#[test]
fn inspection_commands_leave_state_alone() {
    let mut emulator = emulator(PRINT_72);

    for line in ["d", "d 0 4", "l", "l 3 2", "regs"] {
        assert_eq!(run(line, &mut emulator).unwrap(), MonitorFlow::Continue);
    }

    assert_eq!(emulator.pc, 0);
    assert!(emulator.output.is_empty());
}
