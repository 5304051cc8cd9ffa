//! Declarative macro for capability contracts.

/// Declares a capability contract.
///
/// The macro emits an `async_trait` trait with `Send + Sync` supertraits
/// whose methods all return `Result<R, E>` for the declared error type.
/// It also implements [`CapabilityContract`] for the trait object and
/// implements the trait for [`SyntheticInstance`], so the contract can be
/// registered, selected, and synthesized without further code.
///
/// Requirements:
///
/// - every method takes `&self` and is `async`;
/// - every success type implements [`FallbackReturn`], unless the return
///   is marked `#[value]`;
/// - the error type implements `From<CapabilityUnavailable>`.
///
/// Parameters carrying data to persist may be marked `#[payload]`, which
/// classifies the method as a mutation when the payload comes first.
/// A return type marked `#[value]` is treated as a plain value, so types
/// from other crates can be returned without a [`FallbackReturn`] impl.
/// Synthetic instances fail such calls as unavailable.
///
/// [`CapabilityContract`]: crate::capability::ports::CapabilityContract
/// [`SyntheticInstance`]: crate::capability::adapters::synthetic::SyntheticInstance
/// [`FallbackReturn`]: crate::capability::domain::FallbackReturn
///
/// # Examples
///
/// ```
/// use switchyard::capability::domain::CapabilityUnavailable;
///
/// #[derive(Debug)]
/// pub struct ArchiveError(CapabilityUnavailable);
///
/// impl From<CapabilityUnavailable> for ArchiveError {
///     fn from(err: CapabilityUnavailable) -> Self {
///         Self(err)
///     }
/// }
///
/// switchyard::capability_contract! {
///     /// Long-term archive storage.
///     pub trait ArchivePort {
///         error: ArchiveError;
///
///         /// Returns the archive label for a document.
///         async fn find_label(&self, document_id: u64) -> Option<String>;
///
///         /// Moves a document into the archive.
///         async fn archive_document(&self, document_id: u64) -> ();
///
///         /// Returns when a document was archived.
///         async fn archived_at(&self, document_id: u64) -> #[value] std::time::SystemTime;
///     }
/// }
/// ```
#[macro_export]
macro_rules! capability_contract {
    (
        $(#[$meta:meta])*
        $vis:vis trait $name:ident {
            error: $error:ty;
            $(
                $(#[$method_meta:meta])*
                async fn $method:ident(&self $(, $(#[$role:ident])? $param:ident : $param_ty:ty)*) -> $(#[$ret_role:ident])? $ret:ty;
            )*
        }
    ) => {
        $(#[$meta])*
        #[$crate::__private::async_trait]
        $vis trait $name: Send + Sync {
            $(
                $(#[$method_meta])*
                async fn $method(&self $(, $param: $param_ty)*) -> ::core::result::Result<$ret, $error>;
            )*
        }

        impl $crate::capability::ports::CapabilityContract for dyn $name {
            fn contract_name() -> &'static str {
                ::core::stringify!($name)
            }

            fn method_signatures() -> ::std::vec::Vec<$crate::capability::domain::MethodSignature> {
                ::std::vec![
                    $(
                        $crate::capability::domain::MethodSignature::new(
                            ::core::stringify!($method),
                            ::std::vec![
                                $(
                                    $crate::capability::domain::ParamSpec::new(
                                        ::core::stringify!($param),
                                        ::core::stringify!($param_ty),
                                        $crate::__param_role!($($role)?),
                                    ),
                                )*
                            ],
                            $crate::__return_shape!([$($ret_role)?] $ret),
                        ),
                    )*
                ]
            }

            fn synthesize(
                instance: $crate::capability::adapters::synthetic::SyntheticInstance<Self>,
            ) -> ::std::sync::Arc<Self> {
                ::std::sync::Arc::new(instance)
            }
        }

        #[$crate::__private::async_trait]
        impl $name for $crate::capability::adapters::synthetic::SyntheticInstance<dyn $name> {
            $(
                async fn $method(&self $(, $param: $param_ty)*) -> ::core::result::Result<$ret, $error> {
                    let _ = ($($param,)*);
                    let answer = $crate::__synthetic_answer!(dyn $name, [$($ret_role)?] $ret);
                    answer(self, ::core::stringify!($method)).map_err(::core::convert::From::from)
                }
            )*
        }
    };
}

/// Maps an optional `#[payload]` marker to a parameter role.
#[doc(hidden)]
#[macro_export]
macro_rules! __param_role {
    () => {
        $crate::capability::domain::ParamRole::Argument
    };
    (payload) => {
        $crate::capability::domain::ParamRole::Payload
    };
}

/// Maps an optional `#[value]` return marker to a return shape.
#[doc(hidden)]
#[macro_export]
macro_rules! __return_shape {
    ([] $ret:ty) => {
        <$ret as $crate::capability::domain::FallbackReturn>::SHAPE
    };
    ([value] $ret:ty) => {
        $crate::capability::domain::ReturnShape::Value
    };
}

/// Picks the synthetic answer method for a return marker.
#[doc(hidden)]
#[macro_export]
macro_rules! __synthetic_answer {
    ($contract:ty, [] $ret:ty) => {
        $crate::capability::adapters::synthetic::SyntheticInstance::<$contract>::respond::<$ret>
    };
    ($contract:ty, [value] $ret:ty) => {
        $crate::capability::adapters::synthetic::SyntheticInstance::<$contract>::refuse::<$ret>
    };
}
