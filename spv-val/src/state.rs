// Read-only validation-state facade queried by the per-instruction passes
// The surrounding module validator owns the tables and fills them in
// instruction order; passes only ever read

use std::collections::{HashMap, HashSet};

use spirv::{Capability, StorageClass};

use crate::instruction::Word;

/// Registered type descriptor, one per type-declaring instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Bool,
    Int { width: u32, signed: bool },
    Float { width: u32 },
    Vector { component: Word, count: u32 },
    Pointer { storage_class: StorageClass, pointee: Word },
    /// Type kinds this validator does not inspect structurally
    /// (structs, arrays, images, ...)
    Other,
}

/// Feature bits derived from the module's declared capabilities
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Features {
    pub variable_pointers: bool,
    pub variable_pointers_storage_buffer: bool,
}

/// Module-wide id and capability tables.
///
/// `register_*`/`declare_capability` exist for the table's owner (and
/// tests); validation passes use only the query surface.
#[derive(Debug, Default)]
pub struct ValidationState {
    types: HashMap<Word, Type>,
    value_types: HashMap<Word, Word>,
    capabilities: HashSet<Capability>,
    features: Features,
}

impl ValidationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_type(&mut self, id: Word, ty: Type) {
        self.types.insert(id, ty);
    }

    /// Record that value `id` was defined with result type `type_id`
    pub fn register_value(&mut self, id: Word, type_id: Word) {
        self.value_types.insert(id, type_id);
    }

    /// Declaring a capability also enables the features it implies
    pub fn declare_capability(&mut self, capability: Capability) {
        self.capabilities.insert(capability);
        match capability {
            Capability::VariablePointers => {
                self.features.variable_pointers = true;
                self.features.variable_pointers_storage_buffer = true;
            }
            Capability::VariablePointersStorageBuffer => {
                self.features.variable_pointers_storage_buffer = true;
            }
            _ => {}
        }
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    pub fn features(&self) -> Features {
        self.features
    }

    /// The descriptor registered for a type id, if any
    pub fn type_def(&self, id: Word) -> Option<&Type> {
        self.types.get(&id)
    }

    /// The result-type id of the instruction that defined value `id`.
    /// `None` means the id does not name a typed value.
    pub fn get_type_id(&self, id: Word) -> Option<Word> {
        self.value_types.get(&id).copied()
    }

    pub fn is_bool_scalar_type(&self, id: Word) -> bool {
        matches!(self.type_def(id), Some(Type::Bool))
    }

    pub fn is_bool_vector_type(&self, id: Word) -> bool {
        self.vector_component(id)
            .is_some_and(|component| self.is_bool_scalar_type(component))
    }

    pub fn is_int_scalar_type(&self, id: Word) -> bool {
        matches!(self.type_def(id), Some(Type::Int { .. }))
    }

    pub fn is_int_vector_type(&self, id: Word) -> bool {
        self.vector_component(id)
            .is_some_and(|component| self.is_int_scalar_type(component))
    }

    pub fn is_float_scalar_type(&self, id: Word) -> bool {
        matches!(self.type_def(id), Some(Type::Float { .. }))
    }

    pub fn is_float_vector_type(&self, id: Word) -> bool {
        self.vector_component(id)
            .is_some_and(|component| self.is_float_scalar_type(component))
    }

    pub fn is_pointer_type(&self, id: Word) -> bool {
        matches!(self.type_def(id), Some(Type::Pointer { .. }))
    }

    /// Component count: vectors report their declared count, scalars 1,
    /// anything else (including unregistered ids) 0
    pub fn get_dimension(&self, id: Word) -> u32 {
        match self.type_def(id) {
            Some(Type::Bool | Type::Int { .. } | Type::Float { .. }) => 1,
            Some(Type::Vector { count, .. }) => *count,
            _ => 0,
        }
    }

    /// Scalar bit width; vectors report their component's width,
    /// non-numeric kinds 0
    pub fn get_bit_width(&self, id: Word) -> u32 {
        match self.type_def(id) {
            Some(Type::Int { width, .. } | Type::Float { width }) => *width,
            Some(Type::Vector { component, .. }) => self.get_bit_width(*component),
            _ => 0,
        }
    }

    fn vector_component(&self, id: Word) -> Option<Word> {
        match self.type_def(id) {
            Some(Type::Vector { component, .. }) => Some(*component),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> ValidationState {
        let mut state = ValidationState::new();
        state.register_type(1, Type::Bool);
        state.register_type(2, Type::Int { width: 32, signed: false });
        state.register_type(3, Type::Float { width: 32 });
        state.register_type(4, Type::Vector { component: 1, count: 4 });
        state.register_type(5, Type::Vector { component: 3, count: 2 });
        state.register_type(6, Type::Pointer {
            storage_class: StorageClass::StorageBuffer,
            pointee: 3,
        });
        state.register_type(7, Type::Other);
        state
    }

    #[test]
    fn test_scalar_predicates() {
        let state = sample_state();
        assert!(state.is_bool_scalar_type(1));
        assert!(state.is_int_scalar_type(2));
        assert!(state.is_float_scalar_type(3));
        assert!(!state.is_bool_scalar_type(2));
        assert!(!state.is_float_scalar_type(7));
        assert!(!state.is_int_scalar_type(99)); // unregistered
    }

    #[test]
    fn test_vector_predicates_follow_component() {
        let state = sample_state();
        assert!(state.is_bool_vector_type(4));
        assert!(state.is_float_vector_type(5));
        assert!(!state.is_bool_vector_type(5));
        assert!(!state.is_bool_vector_type(1)); // scalar is not a vector
    }

    #[test]
    fn test_dimension() {
        let state = sample_state();
        assert_eq!(state.get_dimension(1), 1);
        assert_eq!(state.get_dimension(4), 4);
        assert_eq!(state.get_dimension(5), 2);
        assert_eq!(state.get_dimension(6), 0); // pointer has no dimension
        assert_eq!(state.get_dimension(99), 0);
    }

    #[test]
    fn test_bit_width_sees_through_vectors() {
        let state = sample_state();
        assert_eq!(state.get_bit_width(2), 32);
        assert_eq!(state.get_bit_width(3), 32);
        assert_eq!(state.get_bit_width(5), 32);
        assert_eq!(state.get_bit_width(1), 0); // bool has no width
        assert_eq!(state.get_bit_width(7), 0);
    }

    #[test]
    fn test_value_type_resolution() {
        let mut state = sample_state();
        state.register_value(20, 3);
        assert_eq!(state.get_type_id(20), Some(3));
        assert_eq!(state.get_type_id(21), None);
    }

    #[test]
    fn test_variable_pointers_implies_storage_buffer_variant() {
        let mut state = ValidationState::new();
        state.declare_capability(Capability::VariablePointers);
        assert!(state.features().variable_pointers);
        assert!(state.features().variable_pointers_storage_buffer);
        assert!(state.has_capability(Capability::VariablePointers));
    }

    #[test]
    fn test_storage_buffer_variant_alone() {
        let mut state = ValidationState::new();
        state.declare_capability(Capability::VariablePointersStorageBuffer);
        assert!(!state.features().variable_pointers);
        assert!(state.features().variable_pointers_storage_buffer);
    }
}
