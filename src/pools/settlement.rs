//! Two-legged asset movements with reversal of the first leg.
//!
//! Every pool operation moves two assets.  The first leg is executed, then
//! the second; if the second fails, the first is sent back before the error
//! surfaces, so a failed operation leaves both assets as they were.

use crate::domain::{Amount, Identity};
use crate::error::RouterError;
use crate::traits::Asset;

/// Memo attached to reversal transfers.
const REVERSAL_MEMO: &[u8] = b"reversal";

/// One asset movement.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Leg<'a> {
    pub from: &'a Identity,
    pub to: &'a Identity,
    pub amount: Amount,
}

/// Executes `first` on `asset_first`, then `second` on `asset_second`.
///
/// # Errors
///
/// - [`RouterError::TransferFailed`] with the error of whichever leg
///   failed.  If the second leg fails, the first has been reversed.
/// - [`RouterError::ReversalFailed`] if the second leg fails and the
///   reversal of the first is refused as well.  The first leg's amount
///   then stays with its recipient.
pub(crate) fn settle<A, B>(
    asset_first: &mut A,
    first: Leg<'_>,
    asset_second: &mut B,
    second: Leg<'_>,
    memo: &[u8],
) -> crate::error::Result<()>
where
    A: Asset + ?Sized,
    B: Asset + ?Sized,
{
    asset_first.transfer(first.from, first.to, first.amount, Some(memo))?;
    let Err(transfer) = asset_second.transfer(second.from, second.to, second.amount, Some(memo))
    else {
        return Ok(());
    };
    if let Err(reversal) =
        asset_first.transfer(first.to, first.from, first.amount, Some(REVERSAL_MEMO))
    {
        tracing::error!(
            asset = %asset_first.id(),
            amount = %first.amount,
            %reversal,
            "could not reverse first leg"
        );
        return Err(RouterError::ReversalFailed {
            transfer,
            reversal,
        });
    }
    Err(RouterError::TransferFailed(transfer))
}
