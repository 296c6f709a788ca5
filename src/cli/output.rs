//! Output sink abstraction
//!
//! The interface never talks to hardware itself. Every echo, prompt and
//! message goes through an [`Output`] supplied by the embedding application,
//! typically a thin wrapper around a UART transmit routine.

/// Destination for everything the interface prints.
///
/// Implementations receive borrowed text and must not assume any maximum
/// length beyond the line capacity of the interface.
pub trait Output {
    /// Print `text` as-is.
    fn print(&mut self, text: &str);
    /// Print `text` followed by a line break.
    fn println(&mut self, text: &str);
}

impl<T: Output + ?Sized> Output for &mut T {
    fn print(&mut self, text: &str) {
        (**self).print(text)
    }

    fn println(&mut self, text: &str) {
        (**self).println(text)
    }
}

/// Function signature for user supplied print routines.
pub type PrintFn = fn(&str);

/// An [`Output`] built from a pair of plain functions.
///
/// This matches the common firmware setup where `print` and `println` are
/// free functions writing to a global UART.
///
/// # Examples
///
/// ```rust
/// use libcli::cli::{FnOutput, Output};
///
/// fn uart_print(text: &str) {
///     print!("{}", text);
/// }
///
/// fn uart_println(text: &str) {
///     print!("{}\r\n", text);
/// }
///
/// let mut out = FnOutput { print: uart_print, println: uart_println };
/// out.println("ready");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnOutput {
    /// Called for text without a line break.
    pub print: PrintFn,
    /// Called for text that ends a line.
    pub println: PrintFn,
}

impl Output for FnOutput {
    fn print(&mut self, text: &str) {
        (self.print)(text)
    }

    fn println(&mut self, text: &str) {
        (self.println)(text)
    }
}

#[cfg(feature = "std")]
impl Output for std::string::String {
    fn print(&mut self, text: &str) {
        self.push_str(text);
    }

    fn println(&mut self, text: &str) {
        self.push_str(text);
        self.push_str("\r\n");
    }
}
