use super::{AssemblyError, Instruction};

#[derive(Debug, Default)]
pub struct AssemblyOutput {
    pub machine_code: Vec<u8>,

    /// Address of the first byte of every assembled instruction, in order.
    pub instruction_addresses: Vec<usize>,
}

impl AssemblyOutput {
    pub fn address_of(&self, instruction_index: usize) -> Option<usize> {
        self.instruction_addresses.get(instruction_index).copied()
    }
}

pub fn assemble<I>(instructions: I) -> Result<AssemblyOutput, AssemblyError>
where
    I: IntoIterator<Item = Instruction>,
{
    instructions
        .into_iter()
        .try_fold(AssemblyOutput::default(), |mut output, instruction| {
            let instruction_machine_code = instruction.assemble()?;

            output.instruction_addresses.push(output.machine_code.len());
            output.machine_code.extend(instruction_machine_code);

            Ok(output)
        })
}
