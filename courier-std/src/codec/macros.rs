/// Declares an envelope: a closed enum selected by a string discriminant.
///
/// The expansion contains the enum itself, its [`Envelope`] impl with a
/// lazily built registry, and `Serialize`/`Deserialize` impls that go
/// through [`codec::encode`] and [`codec::decode`]. Each variant wraps one
/// struct that implements `Serialize + DeserializeOwned + Debug + Clone +
/// PartialEq`; variants do not need to store the discriminant.
///
/// Repeating a discriminant is a compile error.
///
/// # Example
///
/// ```rust,ignore
/// envelope! {
///     /// The way a chat member's status is described.
///     pub enum ChatMember in "status" {
///         "creator" => Owner(ChatMemberOwner),
///         "member" => Member(ChatMemberMember),
///         "left" => Left(ChatMemberLeft),
///     }
/// }
/// ```
///
/// [`Envelope`]: courier_core::Envelope
/// [`codec::encode`]: crate::codec::encode
/// [`codec::decode`]: crate::codec::decode
#[macro_export]
macro_rules! envelope {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident in $field:literal {
            $(
                $(#[$vmeta:meta])*
                $tag:literal => $variant:ident($ty:ty)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant($ty),
            )+
        }

        impl $crate::__private::Envelope for $name {
            const NAME: &'static str = ::core::stringify!($name);
            const DISCRIMINANT: &'static str = $field;

            fn registry() -> &'static $crate::__private::VariantRegistry<Self> {
                #[allow(dead_code)]
                #[deny(unreachable_patterns)]
                fn discriminants_are_unique(tag: &str) {
                    match tag {
                        $( $tag => {} )+
                        _ => {}
                    }
                }

                static REGISTRY: ::std::sync::LazyLock<$crate::__private::VariantRegistry<$name>> =
                    ::std::sync::LazyLock::new(|| {
                        $crate::__private::VariantRegistry::from_entries(
                            ::core::stringify!($name),
                            [
                                $(
                                    ($tag, $crate::__private::decoder::<$name, $ty>($name::$variant)),
                                )+
                            ],
                        )
                    });
                &REGISTRY
            }

            fn kind(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => $tag, )+
                }
            }

            fn encode_variant(
                &self,
            ) -> ::core::result::Result<
                $crate::__private::serde_json::Value,
                $crate::__private::serde_json::Error,
            > {
                match self {
                    $( Self::$variant(variant) => $crate::__private::serde_json::to_value(variant), )+
                }
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serialize_envelope(self, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::__private::deserialize_envelope(deserializer)
            }
        }
    };
}
