use colored::Color;

/// Letter grade for an overall sustainability score.
///
/// Classifies a total (nominally 0–100) into five bands, evaluated top-down:
/// - **A** (≥90): Excellent
/// - **B** (≥70): Notable
/// - **C** (≥50): Sufficient
/// - **D** (≥25): Insufficient
/// - **E** (<25): Very insufficient
///
/// Totals are not clamped, so anything above 100 is still an A.
///
/// # Examples
///
/// ```
/// use ecoscore::scoring::Grade;
///
/// let grade = Grade::from_total(72.4);
/// assert_eq!(grade, Grade::B);
/// assert_eq!(grade.label(), "B (Notable)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub enum Grade {
    E,
    D,
    C,
    B,
    A,
}

impl Grade {
    /// Pure function: total → grade
    ///
    /// Lower bounds are closed (`90.0` is an A). NaN falls through to E.
    ///
    /// # Examples
    ///
    /// ```
    /// use ecoscore::scoring::Grade;
    ///
    /// assert_eq!(Grade::from_total(90.0), Grade::A);
    /// assert_eq!(Grade::from_total(89.9), Grade::B);
    /// assert_eq!(Grade::from_total(50.0), Grade::C);
    /// assert_eq!(Grade::from_total(25.0), Grade::D);
    /// assert_eq!(Grade::from_total(-1.0), Grade::E);
    /// ```
    #[inline]
    pub fn from_total(total: f64) -> Self {
        if total >= 90.0 {
            Self::A
        } else if total >= 70.0 {
            Self::B
        } else if total >= 50.0 {
            Self::C
        } else if total >= 25.0 {
            Self::D
        } else {
            Self::E
        }
    }

    /// Full label shown next to the final score
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A (Excellent)",
            Self::B => "B (Notable)",
            Self::C => "C (Sufficient)",
            Self::D => "D (Insufficient)",
            Self::E => "E (Very insufficient)",
        }
    }

    /// Terminal color for this grade
    #[inline]
    pub const fn color(self) -> Color {
        match self {
            Self::A => Color::Green,
            Self::B => Color::Cyan,
            Self::C => Color::Blue,
            Self::D => Color::Yellow,
            Self::E => Color::Red,
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify an overall total into its grade label
pub fn classify(total: f64) -> &'static str {
    Grade::from_total(total).label()
}
