//! Built-in document templates.
//!
//! Static presets the host surfaces in its template menu. Inserting one is
//! just a buffer replace; the core carries only the data. Date and name
//! fields use literal placeholder text for the user to fill in.

use serde::Serialize;

/// A named starter document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplatePreset {
    /// Stable identifier for host-side persistence.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Menu grouping.
    pub category: &'static str,
    /// Full markdown body.
    pub content: &'static str,
}

/// All built-in presets, in menu order.
pub const PRESETS: &[TemplatePreset] = &[
    TemplatePreset {
        id: "blank",
        name: "Blank Document",
        category: "General",
        content: "# New Document\n\nStart writing here...\n",
    },
    TemplatePreset {
        id: "blog-post",
        name: "Blog Post",
        category: "Writing",
        content: r#"# Blog Post Title

**Published:** YYYY-MM-DD
**Author:** Your Name
**Tags:** #topic #category

---

## Introduction

Write your engaging introduction here. Hook your readers with an
interesting opening.

## Main Content

### Section 1

Your main points go here. Use clear headings to organize your thoughts.

### Section 2

Continue developing your ideas. Add examples, data, or stories to support
your points.

## Key Takeaways

- First important point
- Second important point
- Third important point

## Conclusion

Wrap up your post with a strong conclusion.
"#,
    },
    TemplatePreset {
        id: "readme",
        name: "README.md",
        category: "Development",
        content: r#"# Project Name

> Brief description of your project

## Features

- Feature 1
- Feature 2
- Feature 3

## Installation

```bash
git clone https://github.com/username/project.git
cd project
```

## Usage

```bash
# Run the project
```

## Contributing

Contributions are welcome! Please feel free to submit a Pull Request.

1. Fork the project
2. Create your feature branch
3. Commit your changes
4. Push to the branch
5. Open a Pull Request

## License

This project is licensed under the MIT License - see the [LICENSE](LICENSE)
file for details.
"#,
    },
    TemplatePreset {
        id: "meeting-notes",
        name: "Meeting Notes",
        category: "Business",
        content: r#"# Meeting Notes

**Date:** YYYY-MM-DD
**Time:** HH:MM - HH:MM
**Attendees:** Name 1, Name 2, Name 3

---

## Agenda

1. Review previous action items
2. Discussion topic 1
3. Discussion topic 2
4. Next steps

## Discussion Points

### Topic 1: [Title]

**Key Points:**
- Point 1
- Point 2

**Decisions:**
- Decision 1

## Action Items

| Task | Assigned To | Due Date |
|------|-------------|----------|
| Task 1 | Name | YYYY-MM-DD |
| Task 2 | Name | YYYY-MM-DD |

## Next Meeting

**Date:** TBD
"#,
    },
    TemplatePreset {
        id: "todo-list",
        name: "Todo List",
        category: "Productivity",
        content: r#"# Todo List

## Today's Priorities

- [ ] High priority task 1
- [ ] High priority task 2
- [ ] High priority task 3

## Work Tasks

- [ ] Task 1
- [ ] Task 2

## Personal

- [ ] Personal task 1
- [ ] Personal task 2

## Completed

- [x] Completed task 1
"#,
    },
];

/// Look up a preset by its id.
pub fn find(id: &str) -> Option<&'static TemplatePreset> {
    PRESETS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_id() {
        assert_eq!(find("blank").map(|p| p.name), Some("Blank Document"));
        assert_eq!(find("readme").map(|p| p.category), Some("Development"));
        assert_eq!(find("nope"), None);
    }

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in PRESETS.iter().enumerate() {
            for b in &PRESETS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_every_preset_has_a_title() {
        for preset in PRESETS {
            assert!(preset.content.starts_with("# "), "{} lacks a title", preset.id);
        }
    }
}
