//! Username and password fields

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::app::state::{LoginField, LoginForm};
use crate::tui::theme::styles;

pub struct LoginPanel<'a> {
    form: &'a LoginForm,
    focused: bool,
}

impl<'a> LoginPanel<'a> {
    pub fn new(form: &'a LoginForm, focused: bool) -> Self {
        Self { form, focused }
    }

    fn field(&self, label: &'static str, text: String, active: bool) -> Paragraph<'static> {
        let active = active && self.focused;
        let label_style = if self.form.rejected {
            styles::status_red()
        } else {
            styles::accent_bold()
        };
        let mut content = text;
        if active {
            content.push('█');
        }
        Paragraph::new(content)
            .style(styles::text_primary())
            .block(styles::glass_block(active).title(Line::styled(label, label_style)))
    }
}

impl Widget for LoginPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let outer = styles::glass_block(self.focused).title(Line::styled(" Login ", styles::accent_bold()));
        let inner = outer.inner(area);
        outer.render(area, buf);

        let [user_area, pass_area, _] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(inner);

        let username = self.field(
            self.form.username_label(),
            self.form.username.clone(),
            self.form.field == LoginField::Username,
        );
        let password = self.field(
            self.form.password_label(),
            "*".repeat(self.form.password.chars().count()),
            self.form.field == LoginField::Password,
        );
        username.render(user_area, buf);
        password.render(pass_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_utils::TestTerminal;

    #[test]
    fn test_password_is_masked() {
        let form = LoginForm {
            username: "admin".into(),
            password: "hunter2".into(),
            field: LoginField::Password,
            rejected: false,
        };
        let mut term = TestTerminal::new();
        term.render_widget(LoginPanel::new(&form, true), term.area());

        assert!(term.buffer_contains("admin"));
        assert!(term.buffer_contains("*******"));
        assert!(!term.buffer_contains("hunter2"));
    }

    #[test]
    fn test_rejected_labels() {
        let form = LoginForm {
            rejected: true,
            ..LoginForm::default()
        };
        let mut term = TestTerminal::new();
        term.render_widget(LoginPanel::new(&form, true), term.area());

        assert!(term.buffer_contains("Incorrect! Enter Username"));
        assert!(term.buffer_contains("Incorrect! Enter Password"));
    }
}
