// Operand extraction helpers shared by the per-instruction passes

use crate::instruction::{ParsedInstruction, Word};
use crate::state::ValidationState;

/// Returns the operand word at `operand_index`.
///
/// The operand must exist and occupy exactly one word; violating either is
/// a bug in the caller or the decoder, not a validation failure, so both
/// trip debug assertions rather than produce a diagnostic.
pub fn word_operand(inst: &ParsedInstruction, operand_index: usize) -> Word {
    debug_assert!(
        operand_index < inst.operands.len(),
        "operand index {} out of range for Op{:?}",
        operand_index,
        inst.opcode
    );
    let operand = &inst.operands[operand_index];
    debug_assert_eq!(
        operand.num_words, 1,
        "operand {} of Op{:?} is not single-word",
        operand_index,
        inst.opcode
    );
    inst.words[operand.offset as usize]
}

/// Resolves the id operand at `operand_index` to its registered type id.
///
/// `None` means the id does not name a typed value; rule checkers must
/// treat that as a violation, never as "don't care".
pub fn operand_type_id(
    state: &ValidationState,
    inst: &ParsedInstruction,
    operand_index: usize,
) -> Option<Word> {
    state.get_type_id(word_operand(inst, operand_index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Type;
    use spirv::Op;

    #[test]
    fn test_word_operand_reads_through_offsets() {
        let inst = ParsedInstruction::builder(Op::LogicalNot)
            .result_type(1)
            .result_id(2)
            .id(7)
            .build();

        assert_eq!(word_operand(&inst, 0), 1);
        assert_eq!(word_operand(&inst, 1), 2);
        assert_eq!(word_operand(&inst, 2), 7);
    }

    #[test]
    fn test_operand_type_id_resolves_registered_value() {
        let mut state = ValidationState::new();
        state.register_type(1, Type::Bool);
        state.register_value(7, 1);

        let inst = ParsedInstruction::builder(Op::LogicalNot)
            .result_type(1)
            .result_id(2)
            .id(7)
            .build();

        assert_eq!(operand_type_id(&state, &inst, 2), Some(1));
    }

    #[test]
    fn test_operand_type_id_absent_for_untyped_id() {
        let state = ValidationState::new();
        let inst = ParsedInstruction::builder(Op::LogicalNot)
            .result_type(1)
            .result_id(2)
            .id(7)
            .build();

        assert_eq!(operand_type_id(&state, &inst, 2), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    #[cfg(debug_assertions)]
    fn test_out_of_range_index_is_a_fault() {
        let inst = ParsedInstruction::builder(Op::Nop).build();
        word_operand(&inst, 0);
    }

    #[test]
    #[should_panic(expected = "not single-word")]
    #[cfg(debug_assertions)]
    fn test_multi_word_operand_is_a_fault() {
        let inst = ParsedInstruction::builder(Op::Constant)
            .result_type(1)
            .result_id(2)
            .wide_literal(&[1, 2])
            .build();
        word_operand(&inst, 2);
    }
}
