//! Reflection kinds and flags.

/// What a reflection declares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReflectionKind {
    Project,
    Module,
    Namespace,
    Enum,
    EnumMember,
    Variable,
    Function,
    Class,
    Interface,
    Constructor,
    Property,
    Method,
    CallSignature,
    IndexSignature,
    ConstructorSignature,
    Parameter,
    TypeLiteral,
    TypeParameter,
    Accessor,
    GetSignature,
    SetSignature,
    TypeAlias,
}

impl ReflectionKind {
    /// Returns true if this kind is any of `kinds`.
    pub fn kind_of(self, kinds: &[ReflectionKind]) -> bool {
        kinds.contains(&self)
    }

    /// Functions and methods, the kinds whose signatures are matched by type.
    pub fn is_function_or_method(self) -> bool {
        matches!(self, ReflectionKind::Function | ReflectionKind::Method)
    }

    pub fn is_class_or_interface(self) -> bool {
        matches!(self, ReflectionKind::Class | ReflectionKind::Interface)
    }

    /// Kinds stored as [`SignatureReflection`](super::SignatureReflection)s.
    pub fn is_signature(self) -> bool {
        matches!(
            self,
            ReflectionKind::CallSignature
                | ReflectionKind::IndexSignature
                | ReflectionKind::ConstructorSignature
                | ReflectionKind::GetSignature
                | ReflectionKind::SetSignature
        )
    }
}

/// Modifier flags carried by a reflection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReflectionFlags {
    pub is_static: bool,
    pub is_optional: bool,
    pub is_abstract: bool,
    pub is_readonly: bool,
}

impl ReflectionFlags {
    /// Flags for a static member.
    pub fn statik() -> Self {
        Self {
            is_static: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_or_method() {
        assert!(ReflectionKind::Method.is_function_or_method());
        assert!(ReflectionKind::Function.is_function_or_method());
        assert!(!ReflectionKind::Property.is_function_or_method());
        assert!(!ReflectionKind::Constructor.is_function_or_method());
    }

    #[test]
    fn test_kind_of() {
        let heritage = [ReflectionKind::Class, ReflectionKind::Interface];
        assert!(ReflectionKind::Interface.kind_of(&heritage));
        assert!(!ReflectionKind::TypeAlias.kind_of(&heritage));
    }
}
