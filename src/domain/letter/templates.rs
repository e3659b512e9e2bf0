//! Letter templates, one per transaction kind.
//!
//! Rendering is pure: no clock, no randomness, no I/O. The only decisions
//! made here are the subject and signatory fallbacks; every clause is
//! always present.

use std::fmt;

use super::{Amount, RenderError, TransactionDescription, TransactionKind};

/// Finished letter text, trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterText(String);

impl LetterText {
    /// Returns the letter as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the letter, returning the text.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for LetterText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Renders the letter of intent for a transaction description.
///
/// # Errors
///
/// - [`RenderError::UnknownTransactionType`] when `kind` is not recognised.
/// - [`RenderError::InvalidAmount`] when `price` is not a whole,
///   non-negative number.
pub fn render(description: &TransactionDescription) -> Result<LetterText, RenderError> {
    let kind = description.kind()?;
    let price = Amount::parse(&description.price)?;

    let text = match kind {
        TransactionKind::Business => business(description, &price),
        TransactionKind::Employment => employment(description, &price),
        TransactionKind::RealEstate => real_estate(description, &price),
    };

    Ok(LetterText(text.trim().to_string()))
}

fn business(d: &TransactionDescription, price: &Amount) -> String {
    let sender_company = &d.sender_company;
    let sender_title = &d.sender_title;
    let recipient_name = &d.recipient_name;
    let recipient_title = &d.recipient_title;
    let recipient_company = &d.recipient_company;
    let subject = d.subject_or_placeholder(TransactionKind::Business);
    let period = &d.exclusivity_period;
    let date = &d.date;
    let signatory = d.signatory();

    format!(
        r#"
[{sender_company}]
[Sender Address]
[City, State, Zip]

{date}

[{recipient_name}]
[{recipient_title}]
[{recipient_company}]
[Recipient Address]
[City, State, Zip]

Subject: Letter of Intent for the Acquisition of {recipient_company}
Re: {subject}

Dear {recipient_name},

This Letter of Intent (the "LOI") outlines the proposed terms and conditions for the acquisition by {sender_company} (the "Buyer") of substantially all of the assets of {recipient_company} (the "Seller"). This LOI is an expression of interest only and, except for the "Binding Provisions" section below, is not a legally binding agreement.

1.  PROPOSED TRANSACTION: The Buyer proposes to acquire the business operations of the Seller, including all assets, tangible and intangible, free and clear of any encumbrances.

2.  PURCHASE PRICE: The proposed purchase price is ${price}, subject to adjustments based on due diligence findings.

3.  DUE DILIGENCE: The Buyer will be granted a period to conduct a thorough due diligence investigation of the Seller's business, finances, and operations.

4.  EXCLUSIVITY: In consideration of the Buyer's expenses in pursuing this transaction, the Seller agrees to an exclusivity period of {period} days from the date of this LOI, during which the Seller shall not solicit or enter into discussions with any other party regarding a similar transaction. This exclusivity clause is a binding provision.

5.  CONFIDENTIALITY: All information exchanged between the parties will be held in strict confidence. This confidentiality clause is a binding provision.

6.  GOVERNING LAW: This LOI shall be governed by the laws of [State/Jurisdiction].

BINDING PROVISIONS: Only Sections 4 (Exclusivity) and 5 (Confidentiality) are binding on the parties. All other terms are subject to the negotiation and execution of a definitive agreement.

If these terms are acceptable, please sign below to indicate your non-binding agreement to proceed with negotiations. We look forward to working with you towards a successful transaction.

Sincerely,

_________________________
{signatory}
{sender_title}
{sender_company}
"#
    )
}

fn employment(d: &TransactionDescription, price: &Amount) -> String {
    let sender_company = &d.sender_company;
    let sender_title = &d.sender_title;
    let recipient_name = &d.recipient_name;
    let position = d.subject_or_placeholder(TransactionKind::Employment);
    let date = &d.date;
    let signatory = d.signatory();

    format!(
        r#"
[{sender_company}]
[Company Address]
[City, State, Zip]

{date}

[{recipient_name}]
[Recipient Address]
[City, State, Zip]

Subject: Letter of Intent - Offer of Employment for the position of {position}

Dear {recipient_name},

This Letter of Intent outlines the preliminary offer of employment from {sender_company} (the "Company") to you (the "Candidate") for the full-time position of {position}. This letter expresses our intent and does not constitute a final, binding employment contract.

1.  POSITION: You will be employed as {position}, reporting to [Supervisor's Name/Title].

2.  COMPENSATION: Your proposed annual base salary will be ${price}, payable in accordance with the Company's standard payroll practices.

3.  BENEFITS: You will be eligible to participate in the Company's standard benefits package, which includes health insurance, retirement plans, and paid time off, subject to plan terms and conditions.

4.  START DATE: We anticipate your employment will commence on or about [Start Date].

5.  CONTINGENCIES: This offer is contingent upon the successful completion of a background check, reference checks, and your ability to provide proof of your legal right to work in [Country].

This is a non-binding letter of intent. A formal employment agreement containing the detailed terms and conditions will be provided upon successful completion of the contingencies listed above.

We are very excited about the possibility of you joining our team.

Sincerely,

_________________________
{signatory}
{sender_title}
{sender_company}
"#
    )
}

fn real_estate(d: &TransactionDescription, price: &Amount) -> String {
    let sender_name = &d.sender_name;
    let recipient_name = &d.recipient_name;
    let owner = if d.recipient_company.trim().is_empty() {
        "Owner"
    } else {
        d.recipient_company.as_str()
    };
    let property = d.subject_or_placeholder(TransactionKind::RealEstate);
    let inspection_days = &d.exclusivity_period;
    let date = &d.date;
    let signatory = d.signatory();

    format!(
        r#"
[{sender_name}]
[Sender Address]
[City, State, Zip]

{date}

[{recipient_name}]
[{owner}]
[Property Address]
[City, State, Zip]

Subject: Letter of Intent to Purchase Property at {property}

Dear {recipient_name},

This Letter of Intent (the "LOI") sets forth the proposed terms and conditions for the purchase by {sender_name} (the "Buyer") of the real property located at {property} (the "Property"), currently owned by you (the "Seller"). This LOI is a non-binding expression of interest.

1.  PROPERTY: The property to be acquired is the real estate and all improvements located at {property}.

2.  PURCHASE PRICE: The proposed purchase price for the Property is ${price}.

3.  INSPECTION PERIOD: The Buyer shall have an inspection period of {inspection_days} days from the execution of a formal Purchase and Sale Agreement to conduct all necessary inspections and due diligence.

4.  FINANCING: This offer is contingent upon the Buyer's ability to secure satisfactory financing for the purchase of the Property.

5.  CLOSING: The closing of the transaction is anticipated to occur on or before [Closing Date].

6.  FORMAL AGREEMENT: The parties shall endeavor to negotiate and execute a formal Purchase and Sale Agreement within a reasonable time following the acceptance of this LOI.

This letter is not a contract and creates no legally binding obligations on either party, except for any confidentiality provisions that may be agreed upon separately.

We look forward to the possibility of working with you.

Sincerely,

_________________________
{signatory}
"#
    )
}
