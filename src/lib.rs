//! # Bunrui - Parameter Classification and Validation Engine
//!
//! **Bunrui** classifies and validates the input/output parameter mappings
//! of process-model elements. A parameter never stores how it is meant to
//! be interpreted; instead the engine re-derives the kind (`variable`,
//! `constant-value`, `expression`, `script`, `list`, `map`) from the stored
//! shape on every read and checks values against the rules of their kind.
//! Invalid input is reported as diagnostic data with a corrective hint, not
//! as an error, and rejected values survive kind switches instead of being
//! lost.
//!
//! ## Core Workflow
//!
//! The engine is headless and host-agnostic. It reads a reduced element
//! tree and answers with data; accepted edits come back as command
//! descriptions for the host's own command stack. The primary workflow is:
//!
//! 1.  **Load Your Elements**: Parse your model format into [`store::ElementShape`]
//!     trees, or build them through a [`store::NodeFactory`].
//! 2.  **Classify**: Use [`classify::classify`] to find out which editor a
//!     stored value belongs to.
//! 3.  **Edit**: Drive a [`session::EditSession`] with the user's kind
//!     choices and typed values. The session validates, stashes rejected
//!     input and emits [`store::Command`]s for everything accepted.
//! 4.  **Apply**: Feed the commands into your own command stack, or into
//!     the in-memory reference sink [`store::apply`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bunrui::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // Classification is pure: shape in, kind out.
//!     assert_eq!(classify(Some("${orderId}"), None, None), ParameterKind::Variable);
//!     assert_eq!(classify(Some("plain text"), None, None), ParameterKind::ConstantValue);
//!     assert_eq!(classify(Some("${a + b}"), None, None), ParameterKind::Expression);
//!
//!     // Build an element carrying one input parameter.
//!     let mut factory = NodeFactory::new();
//!     let mut element = ElementShape::new("ServiceTask_1", ElementKind::ServiceTask);
//!     let mut parameter = factory.parameter("customer");
//!     parameter.value = Some("${customerId}".to_string());
//!
//!     let commands = add_parameter(&element, false, Direction::Input, parameter, &mut factory);
//!     apply_all(&mut element, &commands)?;
//!
//!     // Drive an editing session the way a properties editor would.
//!     let parameter = element.input_parameter(false, 0).unwrap().clone();
//!     let mut session = EditSession::new(Direction::Input);
//!     session.select(Some(&parameter));
//!
//!     match session.type_value(&parameter, "${order id}") {
//!         EditOutcome::Rejected(rejected) => println!("rejected: {}", rejected.message),
//!         outcome => println!("accepted: {outcome:?}"),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod error;
pub mod model;
pub mod patterns;
pub mod prelude;
pub mod scope;
pub mod session;
pub mod store;
pub mod template;
pub mod validate;
