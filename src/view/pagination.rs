//! Pagination control builder

/// What a pagination button shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLabel {
    Prev,
    Number(u32),
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub label: PageLabel,
    /// Page to load when clicked; `None` means disabled / non-interactive
    pub target: Option<u32>,
    /// Marks the page currently shown
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub buttons: Vec<PageButton>,
}

/// Prev, one button per page, next. Every page gets its own button.
pub fn build_pagination(current: u32, total: u32) -> Pagination {
    let total = total.max(1);
    let current = current.clamp(1, total);

    let mut buttons = Vec::with_capacity(total as usize + 2);
    buttons.push(PageButton {
        label: PageLabel::Prev,
        target: (current > 1).then(|| current - 1),
        active: false,
    });
    for page in 1..=total {
        let active = page == current;
        buttons.push(PageButton {
            label: PageLabel::Number(page),
            target: (!active).then_some(page),
            active,
        });
    }
    buttons.push(PageButton {
        label: PageLabel::Next,
        target: (current < total).then(|| current + 1),
        active: false,
    });

    Pagination { buttons }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(p: &Pagination) -> Vec<&PageButton> {
        p.buttons
            .iter()
            .filter(|b| matches!(b.label, PageLabel::Number(_)))
            .collect()
    }

    #[test]
    fn test_one_numbered_button_per_page() {
        for total in 1..=7 {
            for current in 1..=total {
                let p = build_pagination(current, total);
                let numbers = numbered(&p);
                assert_eq!(numbers.len(), total as usize);
                for b in numbers {
                    let PageLabel::Number(n) = b.label else { unreachable!() };
                    assert_eq!(b.active, n == current);
                    assert_eq!(b.target.is_none(), n == current);
                }
                let prev = p.buttons.first().unwrap();
                let next = p.buttons.last().unwrap();
                assert_eq!(prev.target.is_none(), current == 1);
                assert_eq!(next.target.is_none(), current == total);
            }
        }
    }

    #[test]
    fn test_prev_next_targets() {
        let p = build_pagination(2, 3);
        assert_eq!(p.buttons[0].target, Some(1));
        assert_eq!(p.buttons[4].target, Some(3));
        assert_eq!(p.buttons.len(), 5);
    }
}
