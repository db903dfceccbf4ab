use thiserror::Error;

use super::strict::Strict;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to build renderer options: {0}")]
    Options(String),

    #[cfg(feature = "katex")]
    #[error("KaTeX rendering failed: {0}")]
    Katex(#[from] katex::Error),

    #[error("math rendering failed: {0}")]
    Engine(String),
}

/// Markup flavour requested from the rendering engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Mathml,
    Html,
    HtmlAndMathml,
}

/// Options for a single render call.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    /// When false the engine renders recoverable errors in place instead of failing.
    pub throw_on_error: bool,
    pub output: OutputFormat,
    pub display_mode: bool,
    pub strict: &'a Strict,
}

impl<'a> RenderOptions<'a> {
    /// Error-tolerant MathML rendering, the way the math rule asks for it.
    pub fn mathml(display_mode: bool, strict: &'a Strict) -> Self {
        Self {
            throw_on_error: false,
            output: OutputFormat::Mathml,
            display_mode,
            strict,
        }
    }
}

/// Converts LaTeX source into a markup fragment.
///
/// Implementations must be deterministic: the same input and options
/// always produce the same output.
pub trait MathRenderer {
    fn render(&self, latex: &str, opts: &RenderOptions<'_>) -> Result<String, RenderError>;
}

impl<F> MathRenderer for F
where
    F: Fn(&str, &RenderOptions<'_>) -> Result<String, RenderError>,
{
    fn render(&self, latex: &str, opts: &RenderOptions<'_>) -> Result<String, RenderError> {
        self(latex, opts)
    }
}

/// Renders through KaTeX via the `katex` crate.
///
/// The `katex` crate does not expose KaTeX's `strict` option, so
/// [`RenderOptions::strict`] is not forwarded and KaTeX applies its own
/// default. A non-lenient setting is reported at debug level.
#[cfg(feature = "katex")]
#[derive(Debug, Clone, Copy, Default)]
pub struct KatexRenderer;

#[cfg(feature = "katex")]
impl MathRenderer for KatexRenderer {
    fn render(&self, latex: &str, opts: &RenderOptions<'_>) -> Result<String, RenderError> {
        if !opts.strict.is_lenient() {
            log::debug!(
                "KaTeX backend ignores strict setting {:?}; using KaTeX default",
                opts.strict
            );
        }
        let output_type = match opts.output {
            OutputFormat::Mathml => katex::OutputType::Mathml,
            OutputFormat::Html => katex::OutputType::Html,
            OutputFormat::HtmlAndMathml => katex::OutputType::HtmlAndMathml,
        };
        let katex_opts = katex::Opts::builder()
            .display_mode(opts.display_mode)
            .output_type(output_type)
            .throw_on_error(opts.throw_on_error)
            .build()
            .map_err(|err| RenderError::Options(err.to_string()))?;

        Ok(katex::render_with_opts(latex, katex_opts)?)
    }
}
