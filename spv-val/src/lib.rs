pub mod instruction;
pub mod logicals;
pub mod operand;
pub mod state;

pub use instruction::{InstructionBuilder, OperandClass, ParsedInstruction, ParsedOperand, Word};
pub use logicals::validate;
pub use state::{Features, Type, ValidationState};
