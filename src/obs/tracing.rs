// self
use crate::{_prelude::*, obs::EndpointKind};

/// A span builder used by discovery endpoints.
#[derive(Clone, Debug)]
pub struct EndpointSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl EndpointSpan {
	/// Creates a new span tagged with the provided endpoint + stage.
	pub fn new(kind: EndpointKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span =
				tracing::info_span!("oidc_discovery.request", endpoint = kind.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Enters the span until the returned guard drops.
	pub fn entered(self) -> EndpointSpanGuard {
		#[cfg(feature = "tracing")]
		{
			EndpointSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			EndpointSpanGuard {}
		}
	}
}

/// RAII guard returned by [`EndpointSpan::entered`].
pub struct EndpointSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for EndpointSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("EndpointSpanGuard(..)")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn endpoint_span_enters_without_subscriber() {
		let guard = EndpointSpan::new(EndpointKind::WebFinger, "test").entered();

		assert_eq!(format!("{guard:?}"), "EndpointSpanGuard(..)");
	}
}
