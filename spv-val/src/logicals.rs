// Validates correctness of logical SPIR-V instructions: boolean
// reductions, float classification, comparisons, logical ops, and Select.
// Each rule checker is a pure function; the first violated rule wins.

use spirv::Op;
use spv_diagnostics::Diagnostic;

use crate::instruction::ParsedInstruction;
use crate::operand::operand_type_id;
use crate::state::{Type, ValidationState};

/// Entry point: dispatches to the rule checker for the instruction's
/// opcode. Opcodes outside this pass validate trivially.
pub fn validate(state: &ValidationState, inst: &ParsedInstruction) -> Result<(), Diagnostic> {
    log::trace!("logicals pass: Op{:?}", inst.opcode);

    match inst.opcode {
        Op::Any | Op::All => check_bool_reduce(state, inst),

        Op::IsNan | Op::IsInf | Op::IsFinite | Op::IsNormal | Op::SignBitSet => {
            check_float_classify(state, inst)
        }

        Op::FOrdEqual
        | Op::FUnordEqual
        | Op::FOrdNotEqual
        | Op::FUnordNotEqual
        | Op::FOrdLessThan
        | Op::FUnordLessThan
        | Op::FOrdGreaterThan
        | Op::FUnordGreaterThan
        | Op::FOrdLessThanEqual
        | Op::FUnordLessThanEqual
        | Op::FOrdGreaterThanEqual
        | Op::FUnordGreaterThanEqual
        | Op::LessOrGreater
        | Op::Ordered
        | Op::Unordered => check_float_compare(state, inst),

        Op::LogicalEqual | Op::LogicalNotEqual | Op::LogicalOr | Op::LogicalAnd => {
            check_logical_binary(state, inst)
        }

        Op::LogicalNot => check_logical_not(state, inst),

        Op::Select => check_select(state, inst),

        Op::IEqual
        | Op::INotEqual
        | Op::UGreaterThan
        | Op::UGreaterThanEqual
        | Op::ULessThan
        | Op::ULessThanEqual
        | Op::SGreaterThan
        | Op::SGreaterThanEqual
        | Op::SLessThan
        | Op::SLessThanEqual => check_int_compare(state, inst),

        _ => Ok(()),
    }
}

fn invalid(message: String) -> Diagnostic {
    Diagnostic::invalid_data(message)
}

/// OpAny / OpAll: bool scalar result from a bool vector operand
fn check_bool_reduce(state: &ValidationState, inst: &ParsedInstruction) -> Result<(), Diagnostic> {
    let opcode = inst.opcode;
    let result_type = inst.result_type.unwrap_or(0);

    if !state.is_bool_scalar_type(result_type) {
        return Err(invalid(format!(
            "Expected bool scalar type as Result Type: Op{opcode:?}"
        )));
    }

    let vector_type = operand_type_id(state, inst, 2);
    if !vector_type.is_some_and(|id| state.is_bool_vector_type(id)) {
        return Err(invalid(format!(
            "Expected operand to be vector bool: Op{opcode:?}"
        )));
    }

    Ok(())
}

/// OpIsNan, OpIsInf, OpIsFinite, OpIsNormal, OpSignBitSet: component-wise
/// float classification into a bool result of matching shape
fn check_float_classify(
    state: &ValidationState,
    inst: &ParsedInstruction,
) -> Result<(), Diagnostic> {
    let opcode = inst.opcode;
    let result_type = inst.result_type.unwrap_or(0);

    if !state.is_bool_scalar_type(result_type) && !state.is_bool_vector_type(result_type) {
        return Err(invalid(format!(
            "Expected bool scalar or vector type as Result Type: Op{opcode:?}"
        )));
    }

    let operand_type = match operand_type_id(state, inst, 2) {
        Some(id) if state.is_float_scalar_type(id) || state.is_float_vector_type(id) => id,
        _ => {
            return Err(invalid(format!(
                "Expected operand to be scalar or vector float: Op{opcode:?}"
            )))
        }
    };

    if state.get_dimension(result_type) != state.get_dimension(operand_type) {
        return Err(invalid(format!(
            "Expected vector sizes of Result Type and the operand to be equal: Op{opcode:?}"
        )));
    }

    Ok(())
}

/// Ordered/unordered float comparisons: both operands the same float
/// scalar/vector type, result bool of matching shape
fn check_float_compare(
    state: &ValidationState,
    inst: &ParsedInstruction,
) -> Result<(), Diagnostic> {
    let opcode = inst.opcode;
    let result_type = inst.result_type.unwrap_or(0);

    if !state.is_bool_scalar_type(result_type) && !state.is_bool_vector_type(result_type) {
        return Err(invalid(format!(
            "Expected bool scalar or vector type as Result Type: Op{opcode:?}"
        )));
    }

    let left_type = match operand_type_id(state, inst, 2) {
        Some(id) if state.is_float_scalar_type(id) || state.is_float_vector_type(id) => id,
        _ => {
            return Err(invalid(format!(
                "Expected operands to be scalar or vector float: Op{opcode:?}"
            )))
        }
    };

    if state.get_dimension(result_type) != state.get_dimension(left_type) {
        return Err(invalid(format!(
            "Expected vector sizes of Result Type and the operands to be equal: Op{opcode:?}"
        )));
    }

    if Some(left_type) != operand_type_id(state, inst, 3) {
        return Err(invalid(format!(
            "Expected left and right operands to have the same type: Op{opcode:?}"
        )));
    }

    Ok(())
}

/// OpLogicalEqual, OpLogicalNotEqual, OpLogicalOr, OpLogicalAnd:
/// homogeneous — both operands must be exactly the result type
fn check_logical_binary(
    state: &ValidationState,
    inst: &ParsedInstruction,
) -> Result<(), Diagnostic> {
    let opcode = inst.opcode;
    let result_type = inst.result_type.unwrap_or(0);

    if !state.is_bool_scalar_type(result_type) && !state.is_bool_vector_type(result_type) {
        return Err(invalid(format!(
            "Expected bool scalar or vector type as Result Type: Op{opcode:?}"
        )));
    }

    if Some(result_type) != operand_type_id(state, inst, 2)
        || Some(result_type) != operand_type_id(state, inst, 3)
    {
        return Err(invalid(format!(
            "Expected both operands to be of Result Type: Op{opcode:?}"
        )));
    }

    Ok(())
}

fn check_logical_not(state: &ValidationState, inst: &ParsedInstruction) -> Result<(), Diagnostic> {
    let opcode = inst.opcode;
    let result_type = inst.result_type.unwrap_or(0);

    if !state.is_bool_scalar_type(result_type) && !state.is_bool_vector_type(result_type) {
        return Err(invalid(format!(
            "Expected bool scalar or vector type as Result Type: Op{opcode:?}"
        )));
    }

    if Some(result_type) != operand_type_id(state, inst, 2) {
        return Err(invalid(format!(
            "Expected operand to be of Result Type: Op{opcode:?}"
        )));
    }

    Ok(())
}

/// OpSelect: condition shape must match the result, both value operands
/// must be exactly the result type. Pointer results are gated on the
/// variable-pointer capabilities (either variant is enough).
fn check_select(state: &ValidationState, inst: &ParsedInstruction) -> Result<(), Diagnostic> {
    let opcode = inst.opcode;
    let result_type = inst.result_type.unwrap_or(0);

    let dimension = match state.type_def(result_type) {
        Some(Type::Pointer { .. }) => {
            let features = state.features();
            if !features.variable_pointers && !features.variable_pointers_storage_buffer {
                return Err(invalid(
                    "Using pointers with OpSelect requires capability VariablePointers \
                     or VariablePointersStorageBuffer"
                        .to_string(),
                ));
            }
            1
        }
        Some(Type::Vector { count, .. }) => *count,
        Some(Type::Bool | Type::Int { .. } | Type::Float { .. }) => 1,
        _ => {
            return Err(invalid(format!(
                "Expected scalar or vector type as Result Type: Op{opcode:?}"
            )))
        }
    };

    let condition_type = match operand_type_id(state, inst, 2) {
        Some(id) if state.is_bool_scalar_type(id) || state.is_bool_vector_type(id) => id,
        _ => {
            return Err(invalid(format!(
                "Expected bool scalar or vector type as condition: Op{opcode:?}"
            )))
        }
    };

    if state.get_dimension(condition_type) != dimension {
        return Err(invalid(format!(
            "Expected vector sizes of Result Type and the condition to be equal: Op{opcode:?}"
        )));
    }

    let left_type = operand_type_id(state, inst, 3);
    let right_type = operand_type_id(state, inst, 4);
    if Some(result_type) != left_type || Some(result_type) != right_type {
        return Err(invalid(format!(
            "Expected both objects to be of Result Type: Op{opcode:?}"
        )));
    }

    Ok(())
}

/// Integer comparisons: operands must agree in shape and component bit
/// width. Signedness is deliberately not compared — the format defines
/// these comparisons over matching widths regardless of sign.
fn check_int_compare(state: &ValidationState, inst: &ParsedInstruction) -> Result<(), Diagnostic> {
    let opcode = inst.opcode;
    let result_type = inst.result_type.unwrap_or(0);

    if !state.is_bool_scalar_type(result_type) && !state.is_bool_vector_type(result_type) {
        return Err(invalid(format!(
            "Expected bool scalar or vector type as Result Type: Op{opcode:?}"
        )));
    }

    let left_type = match operand_type_id(state, inst, 2) {
        Some(id) if state.is_int_scalar_type(id) || state.is_int_vector_type(id) => id,
        _ => {
            return Err(invalid(format!(
                "Expected operands to be scalar or vector int: Op{opcode:?}"
            )))
        }
    };

    if state.get_dimension(result_type) != state.get_dimension(left_type) {
        return Err(invalid(format!(
            "Expected vector sizes of Result Type and the operands to be equal: Op{opcode:?}"
        )));
    }

    let right_type = match operand_type_id(state, inst, 3) {
        Some(id) if state.is_int_scalar_type(id) || state.is_int_vector_type(id) => id,
        _ => {
            return Err(invalid(format!(
                "Expected operands to be scalar or vector int: Op{opcode:?}"
            )))
        }
    };

    if state.get_dimension(result_type) != state.get_dimension(right_type) {
        return Err(invalid(format!(
            "Expected vector sizes of Result Type and the operands to be equal: Op{opcode:?}"
        )));
    }

    if state.get_bit_width(left_type) != state.get_bit_width(right_type) {
        return Err(invalid(format!(
            "Expected both operands to have the same component bit width: Op{opcode:?}"
        )));
    }

    Ok(())
}
