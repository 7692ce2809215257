//! Instruction compiler: turns a [`ReferenceContext`] into the deterministic
//! instruction document sent to a completion provider as the system message.
//!
//! This module is the single source of truth for the temporal-resolution
//! rules (relative dates, vague time-of-day phrases, timezones, exception
//! splitting) and for the output schema the provider must emit. Nothing
//! downstream reinterprets these rules; the decoder only checks shape, so
//! semantic date correctness is bounded by provider fidelity. The compiler
//! performs no clock reads: identical reference contexts always yield
//! character-identical instruction text.

use crate::reference::ReferenceContext;

/// The output schema, embedded verbatim in the compiled instructions. Field
/// names and nullability here are the wire contract the decoder expects.
pub const OUTPUT_SCHEMA_JSON: &str = r#"{
  "availability_windows": [
    {
      "start": "ISO-8601 datetime string",
      "end": "ISO-8601 datetime string",
      "timezone": "IANA timezone or null"
    }
  ],
  "duration_minutes": "integer or null",
  "title": "string or null",
  "description": "string or null",
  "name": "string or null",
  "email": "string or null",
  "phone": "string or null",
  "missing_fields": ["list of strings from: availability, duration, title, name, email"]
}"#;

/// Compile provider-facing instructions from a reference context.
///
/// Pure and deterministic. The reference date, its day-of-week, and the
/// participant's timezone are stated explicitly so the provider never has to
/// compute day-of-week itself.
pub fn compile(reference: &ReferenceContext) -> String {
    let instant = reference.instant.to_rfc3339();
    let date = reference.date_string();
    let weekday = reference.weekday_name();
    let timezone = &reference.timezone;

    format!(
        r#"You are a scheduling assistant for a meeting booking tool. Your job is to
extract structured scheduling data from a participant's natural language input.

## Reference date/time

The current date and time is: {instant}
The current day of the week is: {weekday}
The participant's timezone is: {timezone}

Use this to resolve ALL relative date expressions. Here is how to resolve them:

- "today" = {date} ({weekday})
- "tomorrow" = the next calendar day
- "next <weekday>" = the FIRST occurrence of that weekday AFTER today. For
  example, if today is Friday January 30, then "next Monday" = February 2,
  "next Tuesday" = February 3, "next Friday" = February 6.
- "this <weekday>" = same as "next <weekday>" if that day hasn't occurred yet
  this week; otherwise the following week.
- "next week" = the full Monday-through-Friday of the week following the
  current one. If today is Friday Jan 30, "next week" = Feb 2-6.

IMPORTANT: You MUST verify that the day-of-week you produce matches the
calendar date. For example, if you output 2026-02-03, verify that Feb 3 2026
is indeed a Tuesday (it is: Jan 30 is Friday, +1=Sat, +2=Sun, +3=Mon Feb 2,
+4=Tue Feb 3). Getting the day-of-week wrong is the most common error.

## Date resolution rules

- ALL dates in the output MUST be in the future relative to the reference
  date ({date}).
- If the participant provides a date that appears to be in the past (e.g.,
  "Jan 20" when today is Jan 30), resolve it to the next future occurrence
  of that date pattern. For "Mon Jan 20", find the next Monday that is a
  Jan 20 or, if the intent is clearly "next Monday", use the next Monday.
  Use your best judgment but NEVER return a past date.
- If the participant provides day-of-week names without dates (e.g., "Monday
  and Wednesday"), resolve to the NEXT occurrence of each after today.

## What to extract

From the participant's message, extract ALL of the following that are present:

1. **Availability windows** -- when they are free. Convert every mentioned
   time range into an explicit start/end pair as ISO-8601 datetime strings.

   Time interpretation defaults:
   - "morning" = 09:00 to 12:00
   - "afternoon" = 12:00 to 17:00
   - "evening" = 17:00 to 20:00
   - "all day" or no time qualifier for a specific date = 09:00 to 17:00
   - "after <time>" (e.g., "after 3pm") = <time> to 17:00 (end of business)
   - "before <time>" (e.g., "before noon") = 09:00 to <time>

   Point-in-time expressions: If the participant says "I can meet at 2pm"
   or "2pm works", treat this as the START of an availability window, not a
   fixed 1-hour block. Use a 2-hour window starting at that time (e.g.,
   "at 2pm" = 14:00 to 16:00) unless context suggests otherwise.

   Timezone handling: If the participant mentions a specific timezone (e.g.,
   "2pm EST"), use that timezone for the offset and note it in the timezone
   field. Otherwise use the participant's default timezone ({timezone}).

2. **Duration** -- the requested meeting length in minutes.

3. **Title** -- a short title or topic for the meeting. Extract from topical
   phrases like "chat about X", "discuss Y", "re: Z" -- use X/Y/Z as title.

4. **Description** -- briefly describe how you interpreted the input, noting
   any assumptions you made (e.g., "Interpreted 'afternoon' as 12:00-17:00",
   "Resolved 'next Tuesday' to Feb 3"). This helps the participant confirm
   your interpretation. Leave null only if the input was completely
   unambiguous.

5. **Name** -- the participant's name.

6. **Email** -- the participant's email address.

7. **Phone** -- the participant's phone number.

## Missing fields

After extraction, determine which REQUIRED fields are still missing. The
required fields are: availability, duration, title, name, email.
List each missing required field in the `missing_fields` array.
Phone is optional and should NOT appear in missing_fields.

## Output format

Respond with ONLY a JSON object matching this exact schema (no markdown
fencing, no commentary, no extra keys):

{OUTPUT_SCHEMA_JSON}

## Rules

- Return ONLY valid JSON. No markdown code fences. No explanation text.
- All datetime strings must be ISO-8601 with timezone offset
  (e.g., "2026-02-03T09:00:00-05:00").
- If the participant mentions an exception (e.g., "except Wednesday at noon"),
  split the window around the exception. For example, "10am to 3pm except
  noon" becomes two windows: 10:00-12:00 and 13:00-15:00.
- If structured/formatted text is pasted (e.g., "Available slots: ..."),
  parse it just like natural language -- extract the same fields.
- NEVER return dates in the past relative to {date}.
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_is_deterministic() {
        let reference = ReferenceContext::default();
        assert_eq!(compile(&reference), compile(&reference));
    }

    #[test]
    fn test_compile_states_reference_day_of_week() {
        // 2026-01-30 is a Friday; the instructions must say so literally.
        let reference = ReferenceContext::default();
        let text = compile(&reference);
        assert!(text.contains("The current day of the week is: Friday"));
        assert!(text.contains("2026-01-30"));
    }

    #[test]
    fn test_compile_tracks_reference_context() {
        let reference =
            ReferenceContext::from_rfc3339("2026-02-03T09:00:00-08:00", "America/Los_Angeles")
                .unwrap();
        let text = compile(&reference);
        assert!(text.contains("The current day of the week is: Tuesday"));
        assert!(text.contains("America/Los_Angeles"));
        assert!(text.contains(r#""today" = 2026-02-03 (Tuesday)"#));
    }

    #[test]
    fn test_compile_embeds_output_schema() {
        let text = compile(&ReferenceContext::default());
        assert!(text.contains(OUTPUT_SCHEMA_JSON));
        assert!(text.contains("missing_fields"));
    }

    #[test]
    fn test_compile_encodes_time_of_day_defaults() {
        let text = compile(&ReferenceContext::default());
        assert!(text.contains(r#""morning" = 09:00 to 12:00"#));
        assert!(text.contains(r#""afternoon" = 12:00 to 17:00"#));
        assert!(text.contains(r#""evening" = 17:00 to 20:00"#));
    }

    #[test]
    fn test_compile_encodes_exception_splitting() {
        let text = compile(&ReferenceContext::default());
        assert!(text.contains("split the window around the exception"));
    }

    #[test]
    fn test_compile_forbids_phone_in_missing_fields() {
        let text = compile(&ReferenceContext::default());
        assert!(text.contains("Phone is optional and should NOT appear in missing_fields"));
    }
}
