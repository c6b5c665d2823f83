// Decoded-instruction model consumed by the validation passes
// The decoder owns construction; passes hold read-only references

use spirv::Op;

/// One SPIR-V machine word
pub type Word = u32;

/// Classification of a decoded operand within the instruction's word stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandClass {
    /// The instruction's declared result type (word 1)
    TypeId,
    /// The instruction's result id (word 2 when a type is present)
    ResultId,
    /// Reference to another id (value, type, or label)
    IdRef,
    /// Single-word literal (immediates, enumerant words)
    Literal,
    /// Multi-word literal (64-bit constants, literal strings)
    WideLiteral,
}

/// Position and shape of one operand inside the instruction's words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedOperand {
    pub class: OperandClass,
    /// Word offset within the instruction, counting the header word at 0
    pub offset: u16,
    pub num_words: u16,
}

/// A fully decoded instruction.
///
/// `words` holds the raw encoding including the header word; `operands`
/// indexes into it. The result type and result id, when present, occupy
/// operand slots 0 and 1 so that logical operands start at index 2,
/// matching the binary format's operand numbering.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedInstruction {
    pub opcode: Op,
    pub result_type: Option<Word>,
    pub result_id: Option<Word>,
    pub words: Vec<Word>,
    pub operands: Vec<ParsedOperand>,
}

impl ParsedInstruction {
    pub fn builder(opcode: Op) -> InstructionBuilder {
        InstructionBuilder::new(opcode)
    }
}

/// Assembles a `ParsedInstruction` with operand offsets derived, not
/// hand-counted. Call order defines operand order: result type first,
/// then result id, then the logical operands.
#[derive(Debug)]
pub struct InstructionBuilder {
    opcode: Op,
    result_type: Option<Word>,
    result_id: Option<Word>,
    words: Vec<Word>,
    operands: Vec<ParsedOperand>,
}

impl InstructionBuilder {
    pub fn new(opcode: Op) -> Self {
        Self {
            opcode,
            result_type: None,
            result_id: None,
            // Header word; the final opcode/word-count packing happens in build()
            words: vec![0],
            operands: Vec::new(),
        }
    }

    fn push_single(&mut self, class: OperandClass, word: Word) {
        self.operands.push(ParsedOperand {
            class,
            offset: self.words.len() as u16,
            num_words: 1,
        });
        self.words.push(word);
    }

    pub fn result_type(mut self, type_id: Word) -> Self {
        self.result_type = Some(type_id);
        self.push_single(OperandClass::TypeId, type_id);
        self
    }

    pub fn result_id(mut self, id: Word) -> Self {
        self.result_id = Some(id);
        self.push_single(OperandClass::ResultId, id);
        self
    }

    pub fn id(mut self, id: Word) -> Self {
        self.push_single(OperandClass::IdRef, id);
        self
    }

    pub fn literal(mut self, word: Word) -> Self {
        self.push_single(OperandClass::Literal, word);
        self
    }

    pub fn wide_literal(mut self, literal: &[Word]) -> Self {
        self.operands.push(ParsedOperand {
            class: OperandClass::WideLiteral,
            offset: self.words.len() as u16,
            num_words: literal.len() as u16,
        });
        self.words.extend_from_slice(literal);
        self
    }

    pub fn build(mut self) -> ParsedInstruction {
        self.words[0] = ((self.words.len() as Word) << 16) | (self.opcode as Word & 0xffff);
        ParsedInstruction {
            opcode: self.opcode,
            result_type: self.result_type,
            result_id: self.result_id,
            words: self.words,
            operands: self.operands,
        }
    }
}
